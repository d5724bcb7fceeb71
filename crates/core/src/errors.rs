//! Core error types for the PipsDiary application.
//!
//! This module defines transport-agnostic error types. Errors coming from
//! the remote API client or the browser storage facility are converted to
//! these types at the boundary.

use chrono::ParseError as ChronoParseError;
use thiserror::Error;

use crate::trades::TradeError;

/// Type alias for Result using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Root error type for the trading journal core.
///
/// Domain anomalies are modeled as data wherever the rules allow it (empty
/// stats degrade to zero, the plan gate returns a boolean, unrecognized
/// plans resolve to the free tier); this enum covers the failures that
/// remain.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Trade error: {0}")]
    Trade(#[from] TradeError),

    #[error("Input validation failed: {0}")]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repository(String),

    #[error("Unexpected error: {0}")]
    Unexpected(String),
}

/// Validation errors for user input and data parsing.
#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Required field '{0}' is missing")]
    MissingField(String),

    #[error("Failed to parse decimal number: {0}")]
    DecimalParse(#[from] rust_decimal::Error),

    #[error("Failed to parse date/time: {0}")]
    DateTimeParse(#[from] ChronoParseError),
}

// === From implementations for common error types ===

impl From<rust_decimal::Error> for Error {
    fn from(err: rust_decimal::Error) -> Self {
        Error::Validation(ValidationError::DecimalParse(err))
    }
}

impl From<ChronoParseError> for Error {
    fn from(err: ChronoParseError) -> Self {
        Error::Validation(ValidationError::DateTimeParse(err))
    }
}

impl From<Error> for String {
    fn from(err: Error) -> Self {
        err.to_string()
    }
}
