//! Performance summary model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Performance summary derived from the trade log.
///
/// All fields are plain numbers; the aggregator never fails, it degrades
/// to zero-valued fields on empty input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StatsSummary {
    pub total_trades: usize,
    pub wins: usize,
    pub losses: usize,
    pub net_profit: Decimal,
    /// Net profit per trade, rounded to whole currency units
    pub avg_profit: Decimal,
    /// Percentage of trades classified as wins, rounded to a whole number
    pub win_rate: Decimal,
    pub current_balance: Decimal,
    pub total_pips: Decimal,
    /// Pips per trade, rounded to a whole number
    pub avg_pips: Decimal,
    /// Return on the initial balance, percent with two decimal places.
    /// Zero whenever the initial balance is not strictly positive.
    pub roi: Decimal,
    pub largest_win: Decimal,
    pub largest_loss: Decimal,
    pub initial_balance: Decimal,
    pub profit_factor: Decimal,
}

impl StatsSummary {
    /// Zero-valued summary carrying only the balances through.
    pub fn empty(initial_balance: Decimal, current_balance: Decimal) -> Self {
        StatsSummary {
            total_trades: 0,
            wins: 0,
            losses: 0,
            net_profit: Decimal::ZERO,
            avg_profit: Decimal::ZERO,
            win_rate: Decimal::ZERO,
            current_balance,
            total_pips: Decimal::ZERO,
            avg_pips: Decimal::ZERO,
            roi: Decimal::ZERO,
            largest_win: Decimal::ZERO,
            largest_loss: Decimal::ZERO,
            initial_balance,
            profit_factor: Decimal::ZERO,
        }
    }
}
