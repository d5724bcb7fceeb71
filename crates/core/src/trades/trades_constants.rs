/// Trade outcome labels
///
/// The `result` field on a trade is free text. These constants are the
/// canonical labels written by the entry form; the aggregator classifies
/// outcomes by case-insensitive substring (see `stats::classify_result`),
/// so variants such as "win-partial" still count as wins.

/// Trade closed in profit.
pub const TRADE_RESULT_WIN: &str = "win";

/// Trade closed at a loss.
pub const TRADE_RESULT_LOSS: &str = "loss";

/// Trade closed flat. Excluded from both the win and loss counts.
pub const TRADE_RESULT_BREAKEVEN: &str = "breakeven";

/// Date format used for trade dates in inputs and CSV imports.
pub const TRADE_DATE_FORMAT: &str = "%Y-%m-%d";
