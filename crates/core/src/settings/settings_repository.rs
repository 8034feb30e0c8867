//! Repository traits for settings.

use async_trait::async_trait;

use crate::errors::Result;

/// Repository trait for the key/value settings store.
#[async_trait]
pub trait SettingsRepositoryTrait: Send + Sync {
    /// Get a single setting value by key.
    ///
    /// A missing key is reported as `DatabaseError::NotFound`.
    fn get_setting(&self, setting_key: &str) -> Result<String>;

    /// Update a single setting.
    async fn update_setting(&self, setting_key: &str, setting_value: &str) -> Result<()>;
}
