//! Stats module - the trading performance aggregation engine.

mod stats_aggregator;
mod stats_model;
mod stats_service;

#[cfg(test)]
mod stats_aggregator_tests;

pub use stats_aggregator::{
    calculate_balance_from_trades, classify_result, compute_stats, ResultClass,
};
pub use stats_model::StatsSummary;
pub use stats_service::{BalanceRepositoryTrait, StatsService, StatsServiceTrait};
