use thiserror::Error;

/// Errors specific to trade log operations.
#[derive(Error, Debug)]
pub enum TradeError {
    #[error("Invalid trade data: {0}")]
    InvalidData(String),

    #[error("Trade not found: {0}")]
    NotFound(String),

    /// The subscription plan's entry cap has been reached. This is a normal,
    /// recoverable condition; the UI presents it together with an upgrade
    /// path. Raised by the trade service, never by the plan gate itself.
    #[error("Entry limit reached: the current plan allows at most {max_entries} trades")]
    EntryLimitReached { max_entries: u32 },
}
