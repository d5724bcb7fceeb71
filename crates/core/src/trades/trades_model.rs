//! Trade domain models.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::trades::trades_constants::TRADE_DATE_FORMAT;
use crate::trades::trades_errors::TradeError;
use crate::trades::CsvRowError;

/// Direction of a trade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TradeDirection {
    Buy,
    Sell,
}

impl FromStr for TradeDirection {
    type Err = TradeError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_uppercase().as_str() {
            "BUY" => Ok(TradeDirection::Buy),
            "SELL" => Ok(TradeDirection::Sell),
            other => Err(TradeError::InvalidData(format!(
                "Unknown trade direction '{}'",
                other
            ))),
        }
    }
}

/// Domain model representing one logged trade.
///
/// Records are immutable once created; corrections are modeled as new
/// records by the surrounding application. The `result`/`profit`
/// consistency invariant is treated as data and never validated here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct TradeRecord {
    pub id: String,
    pub date: NaiveDate,
    /// Symbol string, e.g. "XAUUSD"
    pub instrument: String,
    pub direction: TradeDirection,
    pub lot_size: Decimal,
    pub entry_price: Decimal,
    pub stop_price: Decimal,
    pub take_profit_price: Decimal,
    pub exit_price: Decimal,
    /// Recorded outcome label. Free text; see `trades_constants` for the
    /// canonical values.
    pub result: String,
    /// Signed price movement in pip units
    pub pips: Decimal,
    /// Signed currency amount; positive = gain
    pub profit: Decimal,
    /// Running balance snapshot after this trade
    pub balance_after: Decimal,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub risk_reward_ratio: Option<Decimal>,
    // Free-text journal fields, opaque to the aggregator
    pub strategy: Option<String>,
    pub emotion_before: Option<String>,
    pub emotion_after: Option<String>,
    pub screenshot: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Input model for creating a new trade.
#[derive(Serialize, Deserialize, Debug, Clone)]
#[serde(rename_all = "camelCase")]
pub struct NewTrade {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub date: String,
    pub instrument: String,
    pub direction: TradeDirection,
    pub lot_size: Decimal,
    pub entry_price: Decimal,
    pub stop_price: Decimal,
    pub take_profit_price: Decimal,
    pub exit_price: Decimal,
    pub result: String,
    pub pips: Decimal,
    pub profit: Decimal,
    pub balance_after: Decimal,
    pub risk_reward_ratio: Option<Decimal>,
    pub strategy: Option<String>,
    pub emotion_before: Option<String>,
    pub emotion_after: Option<String>,
    pub screenshot: Option<String>,
}

impl NewTrade {
    /// Validates the new trade data.
    pub fn validate(&self) -> std::result::Result<(), TradeError> {
        if self.instrument.trim().is_empty() {
            return Err(TradeError::InvalidData(
                "Instrument cannot be empty".to_string(),
            ));
        }
        if self.lot_size <= Decimal::ZERO {
            return Err(TradeError::InvalidData(
                "Lot size must be positive".to_string(),
            ));
        }
        for (field, price) in [
            ("entryPrice", self.entry_price),
            ("stopPrice", self.stop_price),
            ("takeProfitPrice", self.take_profit_price),
            ("exitPrice", self.exit_price),
        ] {
            if price < Decimal::ZERO {
                return Err(TradeError::InvalidData(format!(
                    "{} cannot be negative",
                    field
                )));
            }
        }
        if let Some(ratio) = self.risk_reward_ratio {
            if ratio <= Decimal::ZERO {
                return Err(TradeError::InvalidData(
                    "Risk/reward ratio must be positive".to_string(),
                ));
            }
        }
        if NaiveDate::parse_from_str(&self.date, TRADE_DATE_FORMAT).is_err() {
            return Err(TradeError::InvalidData(
                "Invalid date format. Expected YYYY-MM-DD".to_string(),
            ));
        }
        Ok(())
    }

    /// Parses the trade date. Call `validate` first; an unparseable date
    /// surfaces as `InvalidData` there.
    pub fn parsed_date(&self) -> std::result::Result<NaiveDate, TradeError> {
        NaiveDate::parse_from_str(&self.date, TRADE_DATE_FORMAT).map_err(|_| {
            TradeError::InvalidData("Invalid date format. Expected YYYY-MM-DD".to_string())
        })
    }
}

/// Summary of a CSV import run: the records created plus the rows that
/// were rejected, each with its row number.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct ImportTradesResult {
    pub imported: Vec<TradeRecord>,
    pub errors: Vec<CsvRowError>,
}

/// Sorts trades into the deterministic order used for running-balance
/// reconstruction: ascending date, ties broken by id.
pub fn sort_trades_chronological(trades: &mut [TradeRecord]) {
    trades.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.id.cmp(&b.id)));
}
