use log::{debug, warn};
use std::sync::Arc;
use uuid::Uuid;

use super::csv_parser::{parse_trades_csv, CsvRowError};
use super::trades_errors::TradeError;
use super::trades_model::{
    sort_trades_chronological, ImportTradesResult, NewTrade, TradeRecord,
};
use super::trades_traits::{TradeRepositoryTrait, TradeServiceTrait};
use crate::errors::Result;
use crate::plans::{PlanGate, SubscriptionServiceTrait};

/// Service for managing the trade log.
///
/// Entry creation is admission-controlled: the service resolves the plan
/// currently in force and consults the plan gate before any write.
pub struct TradeService {
    trade_repository: Arc<dyn TradeRepositoryTrait>,
    subscription_service: Arc<dyn SubscriptionServiceTrait>,
    plan_gate: Arc<PlanGate>,
}

impl TradeService {
    /// Creates a new TradeService instance with injected dependencies.
    pub fn new(
        trade_repository: Arc<dyn TradeRepositoryTrait>,
        subscription_service: Arc<dyn SubscriptionServiceTrait>,
        plan_gate: Arc<PlanGate>,
    ) -> Self {
        Self {
            trade_repository,
            subscription_service,
            plan_gate,
        }
    }

    /// Checks the plan gate for one more entry on top of `current_count`.
    ///
    /// The gate itself only answers yes/no; translating "no" into the
    /// distinct limit-reached condition happens here, at the caller.
    async fn check_entry_allowed(&self, current_count: usize) -> Result<()> {
        let plan = self.subscription_service.effective_plan().await?;
        if self.plan_gate.can_add_entry(&plan, current_count) {
            return Ok(());
        }
        let max_entries = plan.max_entries.unwrap_or_default();
        warn!(
            "Entry limit reached for plan '{}' ({} of {} entries used)",
            plan.plan_id, current_count, max_entries
        );
        Err(TradeError::EntryLimitReached { max_entries }.into())
    }
}

#[async_trait::async_trait]
impl TradeServiceTrait for TradeService {
    async fn create_trade(&self, mut new_trade: NewTrade) -> Result<TradeRecord> {
        new_trade.validate()?;

        let current_count = self.trade_repository.count()?;
        self.check_entry_allowed(current_count).await?;

        if new_trade.id.is_none() {
            new_trade.id = Some(Uuid::new_v4().to_string());
        }

        debug!(
            "Creating trade for instrument {} on {}",
            new_trade.instrument, new_trade.date
        );
        self.trade_repository.create(new_trade).await
    }

    async fn import_trades(&self, csv_content: &str) -> Result<ImportTradesResult> {
        let parsed = parse_trades_csv(csv_content)?;
        let mut result = ImportTradesResult {
            imported: Vec::new(),
            errors: parsed.errors,
        };

        // Each row goes through the gated create path so an import cannot
        // bypass the free-tier cap. The first denial ends the run.
        for (row, new_trade) in parsed.trades {
            match self.create_trade(new_trade).await {
                Ok(record) => result.imported.push(record),
                Err(crate::Error::Trade(TradeError::EntryLimitReached { max_entries })) => {
                    warn!("Import stopped at row {}: entry limit reached", row);
                    result.errors.push(CsvRowError {
                        row,
                        message: format!(
                            "Entry limit reached: the current plan allows at most {} trades",
                            max_entries
                        ),
                    });
                    break;
                }
                Err(e) => {
                    result.errors.push(CsvRowError {
                        row,
                        message: e.to_string(),
                    });
                }
            }
        }

        debug!(
            "Imported {} trades, {} rows rejected",
            result.imported.len(),
            result.errors.len()
        );
        Ok(result)
    }

    async fn delete_trade(&self, trade_id: &str) -> Result<()> {
        self.trade_repository.delete(trade_id).await?;
        Ok(())
    }

    fn get_trade(&self, trade_id: &str) -> Result<TradeRecord> {
        self.trade_repository.get_by_id(trade_id)
    }

    fn get_trades(&self) -> Result<Vec<TradeRecord>> {
        self.trade_repository.get_trades()
    }

    fn get_trades_chronological(&self) -> Result<Vec<TradeRecord>> {
        let mut trades = self.trade_repository.get_trades()?;
        sort_trades_chronological(&mut trades);
        Ok(trades)
    }
}
