//! Trade repository and service traits.
//!
//! These traits define the contract for trade log operations without any
//! transport-specific types. The remote API client and the browser storage
//! facility provide concrete implementations.

use async_trait::async_trait;

use super::trades_model::{ImportTradesResult, NewTrade, TradeRecord};
use crate::errors::Result;

/// Trait defining the contract for trade log persistence.
#[async_trait]
pub trait TradeRepositoryTrait: Send + Sync {
    /// Creates a new trade record.
    async fn create(&self, new_trade: NewTrade) -> Result<TradeRecord>;

    /// Deletes a trade by its ID.
    ///
    /// Returns the number of deleted records.
    async fn delete(&self, trade_id: &str) -> Result<usize>;

    /// Retrieves a trade by its ID.
    fn get_by_id(&self, trade_id: &str) -> Result<TradeRecord>;

    /// Lists all trades in whatever order the storage layer returns.
    fn get_trades(&self) -> Result<Vec<TradeRecord>>;

    /// Number of existing trade entries. Consulted by the plan gate.
    fn count(&self) -> Result<usize>;
}

/// Trait defining the contract for trade service operations.
#[async_trait]
pub trait TradeServiceTrait: Send + Sync {
    /// Creates a new trade after validation and the plan gate check.
    async fn create_trade(&self, new_trade: NewTrade) -> Result<TradeRecord>;

    /// Imports trades from CSV content, one gated create per row.
    async fn import_trades(&self, csv_content: &str) -> Result<ImportTradesResult>;

    /// Deletes a trade by its ID.
    async fn delete_trade(&self, trade_id: &str) -> Result<()>;

    /// Retrieves a trade by ID.
    fn get_trade(&self, trade_id: &str) -> Result<TradeRecord>;

    /// Lists all trades.
    fn get_trades(&self) -> Result<Vec<TradeRecord>>;

    /// Lists all trades in ascending date order, ties broken by id - the
    /// order required for running-balance reconstruction.
    fn get_trades_chronological(&self) -> Result<Vec<TradeRecord>>;
}
