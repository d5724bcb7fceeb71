use log::{debug, warn};
use std::sync::Arc;

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::stats_aggregator::{calculate_balance_from_trades, compute_stats};
use super::stats_model::StatsSummary;
use crate::errors::Result;
use crate::settings::SettingsServiceTrait;
use crate::trades::TradeRepositoryTrait;

/// Source of the authoritative account balance (the remote API).
#[async_trait]
pub trait BalanceRepositoryTrait: Send + Sync {
    /// Returns the authoritative current balance, if the remote side
    /// tracks one.
    async fn get_current_balance(&self) -> Result<Option<Decimal>>;
}

/// Trait for the stats service.
#[async_trait]
pub trait StatsServiceTrait: Send + Sync {
    async fn get_stats(&self) -> Result<StatsSummary>;
}

/// Service producing the performance summary shown on the dashboard.
///
/// Prefers the authoritative remote balance; when the remote side has
/// none (or is unreachable) it falls back to the balance derived from the
/// trade log before handing everything to the pure aggregator.
pub struct StatsService {
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    balance_repository: Arc<dyn BalanceRepositoryTrait>,
    settings_service: Arc<dyn SettingsServiceTrait>,
}

impl StatsService {
    /// Creates a new StatsService instance with injected dependencies.
    pub fn new(
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        balance_repository: Arc<dyn BalanceRepositoryTrait>,
        settings_service: Arc<dyn SettingsServiceTrait>,
    ) -> Self {
        Self {
            trade_repository,
            balance_repository,
            settings_service,
        }
    }
}

#[async_trait]
impl StatsServiceTrait for StatsService {
    async fn get_stats(&self) -> Result<StatsSummary> {
        debug!("Computing performance summary...");

        let initial_balance = self.settings_service.get_settings()?.initial_balance;
        let trades = self.trade_repository.get_trades()?;

        let current_balance = match self.balance_repository.get_current_balance().await {
            Ok(Some(balance)) => balance,
            Ok(None) => calculate_balance_from_trades(initial_balance, &trades),
            Err(e) => {
                warn!("Remote balance unavailable, deriving from trade log: {}", e);
                calculate_balance_from_trades(initial_balance, &trades)
            }
        };

        Ok(compute_stats(initial_balance, current_balance, &trades))
    }
}
