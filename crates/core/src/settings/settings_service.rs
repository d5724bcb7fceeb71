use std::str::FromStr;
use std::sync::Arc;

use async_trait::async_trait;
use log::warn;
use rust_decimal::Decimal;

use super::settings_model::{Settings, SettingsUpdate};
use super::settings_traits::{SettingsRepositoryTrait, SettingsServiceTrait};
use crate::errors::Result;

const SETTING_INITIAL_BALANCE: &str = "initial_balance";
const SETTING_BASE_CURRENCY: &str = "base_currency";
const SETTING_ONBOARDING_COMPLETED: &str = "onboarding_completed";

/// Service for reading and updating user settings.
///
/// Stored values are strings; unparseable values fall back to the default
/// with a warning rather than failing the whole settings read.
pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

impl SettingsService {
    /// Creates a new SettingsService instance.
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        Self {
            settings_repository,
        }
    }

    fn parse_decimal_setting(&self, key: &str, fallback: Decimal) -> Result<Decimal> {
        match self.settings_repository.get_setting(key)? {
            Some(raw) => match Decimal::from_str(&raw) {
                Ok(value) => Ok(value),
                Err(e) => {
                    warn!("Stored setting '{}' is not a decimal ({}), using default", key, e);
                    Ok(fallback)
                }
            },
            None => Ok(fallback),
        }
    }
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn get_settings(&self) -> Result<Settings> {
        let defaults = Settings::default();

        let initial_balance =
            self.parse_decimal_setting(SETTING_INITIAL_BALANCE, defaults.initial_balance)?;
        let base_currency = self
            .settings_repository
            .get_setting(SETTING_BASE_CURRENCY)?
            .unwrap_or(defaults.base_currency);
        let onboarding_completed = self
            .settings_repository
            .get_setting(SETTING_ONBOARDING_COMPLETED)?
            .map(|raw| raw == "true")
            .unwrap_or(defaults.onboarding_completed);

        Ok(Settings {
            initial_balance,
            base_currency,
            onboarding_completed,
        })
    }

    async fn update_settings(&self, update: &SettingsUpdate) -> Result<()> {
        if let Some(initial_balance) = update.initial_balance {
            self.settings_repository
                .set_setting(SETTING_INITIAL_BALANCE, &initial_balance.to_string())
                .await?;
        }
        if let Some(ref base_currency) = update.base_currency {
            self.settings_repository
                .set_setting(SETTING_BASE_CURRENCY, base_currency)
                .await?;
        }
        if let Some(onboarding_completed) = update.onboarding_completed {
            self.settings_repository
                .set_setting(
                    SETTING_ONBOARDING_COMPLETED,
                    if onboarding_completed { "true" } else { "false" },
                )
                .await?;
        }
        Ok(())
    }

    fn get_initial_balance(&self) -> Result<Decimal> {
        self.parse_decimal_setting(SETTING_INITIAL_BALANCE, Decimal::ZERO)
    }

    async fn update_initial_balance(&self, initial_balance: Decimal) -> Result<()> {
        self.settings_repository
            .set_setting(SETTING_INITIAL_BALANCE, &initial_balance.to_string())
            .await
    }
}
