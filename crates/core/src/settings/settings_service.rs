use super::SettingsRepositoryTrait;
use crate::constants::{CONVERSION_RATE_KEY, SURCHARGE_RATE_KEY};
use crate::errors::{DatabaseError, Error, Result, ValidationError};
use crate::settings::{RateSettings, RateSettingsUpdate};
use async_trait::async_trait;
use log::debug;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::Arc;

#[async_trait]
pub trait SettingsServiceTrait: Send + Sync {
    /// Reads the stored rates. Unset rates read as zero.
    fn current_rates(&self) -> Result<RateSettings>;

    /// Writes the provided rates, leaving the others untouched.
    async fn update_rates(&self, update: &RateSettingsUpdate) -> Result<()>;
}

pub struct SettingsService {
    settings_repository: Arc<dyn SettingsRepositoryTrait>,
}

#[async_trait]
impl SettingsServiceTrait for SettingsService {
    fn current_rates(&self) -> Result<RateSettings> {
        Ok(RateSettings {
            conversion_rate: self.get_rate(CONVERSION_RATE_KEY)?,
            surcharge_rate: self.get_rate(SURCHARGE_RATE_KEY)?,
        })
    }

    async fn update_rates(&self, update: &RateSettingsUpdate) -> Result<()> {
        let changes = [
            (CONVERSION_RATE_KEY, update.conversion_rate),
            (SURCHARGE_RATE_KEY, update.surcharge_rate),
        ];

        for (key, value) in changes.iter() {
            if let Some(rate) = value {
                if *rate < Decimal::ZERO {
                    return Err(Error::Validation(ValidationError::InvalidInput(format!(
                        "{} cannot be negative",
                        key
                    ))));
                }
            }
        }

        for (key, value) in changes {
            if let Some(rate) = value {
                debug!("Updating setting {} to {}", key, rate);
                self.settings_repository
                    .update_setting(key, &rate.to_string())
                    .await?;
            }
        }
        Ok(())
    }
}

impl SettingsService {
    pub fn new(settings_repository: Arc<dyn SettingsRepositoryTrait>) -> Self {
        SettingsService {
            settings_repository,
        }
    }

    fn get_rate(&self, key: &str) -> Result<Decimal> {
        match self.settings_repository.get_setting(key) {
            Ok(value) => Ok(Decimal::from_str(value.trim())?),
            Err(Error::Database(DatabaseError::NotFound(_))) => Ok(Decimal::ZERO),
            Err(e) => Err(e),
        }
    }
}
