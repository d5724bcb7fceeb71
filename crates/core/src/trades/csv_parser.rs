//! CSV import for trade logs.
//!
//! Parses a UTF-8 CSV export into trade inputs. Rows that fail to parse are
//! collected with their row numbers instead of aborting the whole file;
//! valid rows survive.

use csv::ReaderBuilder;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result, ValidationError};
use crate::trades::trades_model::{NewTrade, TradeDirection};

/// One row that was rejected, with its 1-based data row number.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CsvRowError {
    pub row: usize,
    pub message: String,
}

/// Result of parsing a trade log CSV: row-numbered trade inputs plus the
/// rejected rows.
#[derive(Debug, Default)]
pub struct ParsedCsvResult {
    pub trades: Vec<(usize, NewTrade)>,
    pub errors: Vec<CsvRowError>,
}

/// Raw CSV row shape. Header names follow the export format:
/// `date,instrument,direction,lotSize,entryPrice,stopPrice,
/// takeProfitPrice,exitPrice,result,pips,profit,balanceAfter,
/// riskRewardRatio,strategy,emotionBefore,emotionAfter`
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CsvTradeRow {
    date: String,
    instrument: String,
    direction: String,
    lot_size: Decimal,
    entry_price: Decimal,
    stop_price: Decimal,
    take_profit_price: Decimal,
    exit_price: Decimal,
    result: String,
    pips: Decimal,
    profit: Decimal,
    balance_after: Decimal,
    #[serde(default)]
    risk_reward_ratio: Option<Decimal>,
    #[serde(default)]
    strategy: Option<String>,
    #[serde(default)]
    emotion_before: Option<String>,
    #[serde(default)]
    emotion_after: Option<String>,
}

impl CsvTradeRow {
    fn into_new_trade(self) -> std::result::Result<NewTrade, String> {
        let direction: TradeDirection =
            self.direction.parse().map_err(|e: crate::trades::TradeError| e.to_string())?;
        Ok(NewTrade {
            id: None,
            date: self.date,
            instrument: self.instrument,
            direction,
            lot_size: self.lot_size,
            entry_price: self.entry_price,
            stop_price: self.stop_price,
            take_profit_price: self.take_profit_price,
            exit_price: self.exit_price,
            result: self.result,
            pips: self.pips,
            profit: self.profit,
            balance_after: self.balance_after,
            risk_reward_ratio: self.risk_reward_ratio,
            strategy: self.strategy,
            emotion_before: self.emotion_before,
            emotion_after: self.emotion_after,
            screenshot: None,
        })
    }
}

/// Parses trade log CSV content.
///
/// Returns an error only when the content is empty; malformed rows are
/// reported per row in the result.
pub fn parse_trades_csv(content: &str) -> Result<ParsedCsvResult> {
    if content.trim().is_empty() {
        return Err(Error::Validation(ValidationError::InvalidInput(
            "CSV content is empty".to_string(),
        )));
    }

    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut parsed = ParsedCsvResult::default();

    for (index, record) in reader.deserialize::<CsvTradeRow>().enumerate() {
        let row = index + 1;
        match record {
            Ok(csv_row) => match csv_row.into_new_trade() {
                Ok(new_trade) => parsed.trades.push((row, new_trade)),
                Err(message) => parsed.errors.push(CsvRowError { row, message }),
            },
            Err(e) => parsed.errors.push(CsvRowError {
                row,
                message: e.to_string(),
            }),
        }
    }

    Ok(parsed)
}
