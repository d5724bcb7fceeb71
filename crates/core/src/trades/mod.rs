//! Trades module - domain models, services, and traits.

mod csv_parser;
mod trades_constants;
mod trades_errors;
mod trades_model;
mod trades_service;
mod trades_traits;



pub use csv_parser::{parse_trades_csv, CsvRowError, ParsedCsvResult};
pub use trades_constants::*;
pub use trades_errors::TradeError;
pub use trades_model::{
    sort_trades_chronological, ImportTradesResult, NewTrade, TradeDirection, TradeRecord,
};
pub use trades_service::TradeService;
pub use trades_traits::{TradeRepositoryTrait, TradeServiceTrait};
