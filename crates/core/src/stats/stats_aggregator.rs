//! Performance aggregation over the raw trade log.
//!
//! Everything in this file is a pure function: no I/O, no hidden state,
//! no failure modes. Denominators that could be zero are guarded before
//! every division, so the aggregation never errors and degrades to
//! zero-valued fields instead.

use num_traits::Zero;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::{DISPLAY_DECIMAL_PRECISION, PROFIT_FACTOR_SENTINEL};
use crate::stats::stats_model::StatsSummary;
use crate::trades::TradeRecord;

/// Outcome classification used by the aggregator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResultClass {
    Win,
    Loss,
    Other,
}

/// Classifies a recorded outcome label.
///
/// Matching is a case-insensitive substring check, so labels like
/// "win-partial" or "Daily LOSS" are counted. Win is checked first, so a
/// label containing both substrings counts as a win, never as both.
/// Anything else (breakeven, blank, typos) is excluded from both counts.
pub fn classify_result(result: &str) -> ResultClass {
    let normalized = result.to_lowercase();
    if normalized.contains("win") {
        ResultClass::Win
    } else if normalized.contains("loss") || normalized.contains("lose") {
        ResultClass::Loss
    } else {
        ResultClass::Other
    }
}

/// Reconstructs the current balance from the trade log alone:
/// `initial_balance` plus every recorded profit, folded in the given
/// slice order.
///
/// This is the fallback the caller applies when the remote API has no
/// authoritative balance; `compute_stats` never applies it on its own.
pub fn calculate_balance_from_trades(initial_balance: Decimal, trades: &[TradeRecord]) -> Decimal {
    trades
        .iter()
        .fold(initial_balance, |balance, trade| balance + trade.profit)
}

/// Reduces the trade log into a performance summary in a single pass.
///
/// `current_balance` is supplied by the caller - the authoritative remote
/// value when one exists, otherwise whatever fallback the caller chose
/// (typically `calculate_balance_from_trades`).
pub fn compute_stats(
    initial_balance: Decimal,
    current_balance: Decimal,
    trades: &[TradeRecord],
) -> StatsSummary {
    if trades.is_empty() {
        return StatsSummary::empty(initial_balance, current_balance);
    }

    let total_trades = trades.len();
    let mut wins = 0usize;
    let mut losses = 0usize;
    let mut net_profit = Decimal::ZERO;
    let mut total_pips = Decimal::ZERO;
    let mut largest_win = Decimal::ZERO;
    let mut largest_loss = Decimal::ZERO;

    for trade in trades {
        match classify_result(&trade.result) {
            ResultClass::Win => wins += 1,
            ResultClass::Loss => losses += 1,
            ResultClass::Other => {}
        }
        net_profit += trade.profit;
        total_pips += trade.pips;
        if trade.profit > largest_win {
            largest_win = trade.profit;
        }
        if trade.profit < largest_loss {
            largest_loss = trade.profit;
        }
    }

    let trade_count = Decimal::from(total_trades);
    let avg_profit = round_to_unit(net_profit / trade_count);
    let win_rate = round_to_unit(Decimal::from(wins) * Decimal::ONE_HUNDRED / trade_count);
    let avg_pips = round_to_unit(total_pips / trade_count);

    let roi = if initial_balance > Decimal::zero() {
        ((current_balance - initial_balance) / initial_balance * Decimal::ONE_HUNDRED)
            .round_dp_with_strategy(
                DISPLAY_DECIMAL_PRECISION,
                RoundingStrategy::MidpointAwayFromZero,
            )
    } else {
        Decimal::ZERO
    };

    StatsSummary {
        total_trades,
        wins,
        losses,
        net_profit,
        avg_profit,
        win_rate,
        current_balance,
        total_pips,
        avg_pips,
        roi,
        largest_win,
        largest_loss,
        initial_balance,
        profit_factor: profit_factor(wins, losses, avg_profit),
    }
}

/// Profit factor in the count-times-average form used by the product:
/// `(wins * avg_profit) / |losses * avg_profit|`, with the sentinel for
/// an account that has wins and no losses.
///
/// The denominator is zero when the rounded average profit is zero, so
/// the factor degrades to zero in that case instead of dividing.
fn profit_factor(wins: usize, losses: usize, avg_profit: Decimal) -> Decimal {
    if wins > 0 && losses == 0 {
        return Decimal::from(PROFIT_FACTOR_SENTINEL);
    }
    if wins == 0 || losses == 0 {
        return Decimal::ZERO;
    }
    let gross_loss = (Decimal::from(losses) * avg_profit).abs();
    if gross_loss.is_zero() {
        return Decimal::ZERO;
    }
    Decimal::from(wins) * avg_profit / gross_loss
}

/// Rounds to the nearest whole unit, midpoints away from zero.
fn round_to_unit(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}
