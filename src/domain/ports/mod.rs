use crate::error::AppError;
use async_trait::async_trait;

/// Named key/value slots. Writes replace the whole value; concurrent writers
/// resolve by last write wins.
#[async_trait]
pub trait SettingsRepository: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, AppError>;
    async fn put(&self, key: &str, value: &str) -> Result<(), AppError>;
}
