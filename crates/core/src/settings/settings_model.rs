//! Settings domain models.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// User settings relevant to the journal core.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// Starting account balance, the baseline for ROI and balance
    /// reconstruction.
    pub initial_balance: Decimal,
    pub base_currency: String,
    pub onboarding_completed: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            initial_balance: Decimal::ZERO,
            base_currency: "USD".to_string(),
            onboarding_completed: false,
        }
    }
}

/// Partial update for settings; absent fields are left unchanged.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct SettingsUpdate {
    pub initial_balance: Option<Decimal>,
    pub base_currency: Option<String>,
    pub onboarding_completed: Option<bool>,
}
