//! Application state container.
//!
//! The composition root owns a single `AppState` value and advances it
//! through `reduce`, a pure function from state and action to new state.
//! Nothing here is global or ambient: the state is passed down to views
//! as plain data, and derived figures are recomputed on demand rather
//! than stored.

use serde::{Deserialize, Serialize};

use crate::plans::Subscription;
use crate::settings::Settings;
use crate::stats::{calculate_balance_from_trades, compute_stats, StatsSummary};
use crate::trades::TradeRecord;

/// The whole client-side application state relevant to the journal core.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub trades: Vec<TradeRecord>,
    pub subscription: Option<Subscription>,
    pub settings: Settings,
}

impl AppState {
    /// Derived performance summary over the in-memory trade log, using
    /// the balance reconstructed from the log itself. The authoritative
    /// remote balance flows through `StatsService` instead; this is the
    /// offline view.
    pub fn stats(&self) -> StatsSummary {
        let current_balance =
            calculate_balance_from_trades(self.settings.initial_balance, &self.trades);
        compute_stats(self.settings.initial_balance, current_balance, &self.trades)
    }
}

/// State transitions, applied by `reduce`.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// The trade log was (re)loaded from the API or the local cache.
    TradesLoaded { trades: Vec<TradeRecord> },

    /// One trade was created.
    TradeAdded { trade: TradeRecord },

    /// One trade was deleted.
    TradeDeleted { trade_id: String },

    /// The subscription was replaced wholesale (upgrade/downgrade/sync).
    SubscriptionChanged { subscription: Option<Subscription> },

    /// Settings were saved.
    SettingsUpdated { settings: Settings },
}

impl Action {
    /// Creates a TradesLoaded action.
    pub fn trades_loaded(trades: Vec<TradeRecord>) -> Self {
        Self::TradesLoaded { trades }
    }

    /// Creates a TradeAdded action.
    pub fn trade_added(trade: TradeRecord) -> Self {
        Self::TradeAdded { trade }
    }

    /// Creates a TradeDeleted action.
    pub fn trade_deleted(trade_id: impl Into<String>) -> Self {
        Self::TradeDeleted {
            trade_id: trade_id.into(),
        }
    }

    /// Creates a SubscriptionChanged action.
    pub fn subscription_changed(subscription: Option<Subscription>) -> Self {
        Self::SubscriptionChanged { subscription }
    }

    /// Creates a SettingsUpdated action.
    pub fn settings_updated(settings: Settings) -> Self {
        Self::SettingsUpdated { settings }
    }
}

/// Applies an action, returning the new state. Pure: same state and
/// action always produce the same result.
pub fn reduce(state: AppState, action: Action) -> AppState {
    match action {
        Action::TradesLoaded { trades } => AppState { trades, ..state },
        Action::TradeAdded { trade } => {
            let mut trades = state.trades;
            trades.push(trade);
            AppState { trades, ..state }
        }
        Action::TradeDeleted { trade_id } => {
            let trades = state
                .trades
                .into_iter()
                .filter(|trade| trade.id != trade_id)
                .collect();
            AppState { trades, ..state }
        }
        Action::SubscriptionChanged { subscription } => AppState {
            subscription,
            ..state
        },
        Action::SettingsUpdated { settings } => AppState { settings, ..state },
    }
}
