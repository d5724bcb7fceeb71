//! Settings repository and service traits.

use async_trait::async_trait;
use rust_decimal::Decimal;

use super::settings_model::{Settings, SettingsUpdate};
use crate::errors::Result;

/// Trait for key-value settings persistence.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key. Returns None if not found.
    fn get_setting(&self, key: &str) -> Result<Option<String>>;

    /// Set a single setting value by key.
    async fn set_setting(&self, key: &str, value: &str) -> Result<()>;
}

/// Trait for settings service operations.
#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    fn get_settings(&self) -> Result<Settings>;

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<()>;

    fn get_initial_balance(&self) -> Result<Decimal>;

    async fn update_initial_balance(&self, initial_balance: Decimal) -> Result<()>;
}
