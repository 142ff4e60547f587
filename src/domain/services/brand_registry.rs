use std::collections::HashSet;
use std::sync::Arc;
use serde::Serialize;
use tracing::{error, info, warn};

use crate::domain::models::brand::Brand;
use crate::domain::ports::SettingsRepository;
use crate::domain::services::defaults::builtin_brand;
use crate::error::AppError;

/// Result of a best-effort registry write. A lost write leaves the
/// previously persisted set untouched.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PersistOutcome {
    Saved,
    Lost { reason: String },
}

impl PersistOutcome {
    pub fn is_saved(&self) -> bool {
        matches!(self, PersistOutcome::Saved)
    }
}

/// All configured brands, persisted as one JSON array under a single
/// settings slot.
pub struct BrandRegistry {
    settings: Arc<dyn SettingsRepository>,
    storage_key: String,
}

impl BrandRegistry {
    pub fn new(settings: Arc<dyn SettingsRepository>, storage_key: impl Into<String>) -> Self {
        Self { settings, storage_key: storage_key.into() }
    }

    /// Persisted brands in stored order, or the built-in brand when nothing
    /// usable is stored. Never fails.
    pub async fn all_brands(&self) -> Vec<Brand> {
        match self.load_persisted().await {
            Some(brands) if !brands.is_empty() => brands,
            _ => vec![builtin_brand()],
        }
    }

    pub async fn brand_by_id(&self, id: &str) -> Option<Brand> {
        self.all_brands().await.into_iter().find(|b| b.id == id)
    }

    /// Replaces the persisted set wholesale. Only an invalid set is an error;
    /// storage failures are logged and reported through the outcome.
    pub async fn save_brands(&self, brands: &[Brand]) -> Result<PersistOutcome, AppError> {
        validate_brands(brands)?;

        let payload = match serde_json::to_string(brands) {
            Ok(payload) => payload,
            Err(e) => {
                error!("Failed to serialize brands: {}", e);
                return Ok(PersistOutcome::Lost { reason: e.to_string() });
            }
        };

        match self.settings.put(&self.storage_key, &payload).await {
            Ok(()) => {
                info!(count = brands.len(), "Brand registry saved");
                Ok(PersistOutcome::Saved)
            }
            Err(e) => {
                error!("Failed to persist brand registry: {}", e);
                Ok(PersistOutcome::Lost { reason: e.to_string() })
            }
        }
    }

    async fn load_persisted(&self) -> Option<Vec<Brand>> {
        let raw = match self.settings.get(&self.storage_key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => return None,
            Err(e) => {
                warn!("Brand registry unreadable, using built-in brand: {}", e);
                return None;
            }
        };

        match serde_json::from_str::<Vec<Brand>>(&raw) {
            Ok(brands) => Some(brands),
            Err(e) => {
                warn!("Persisted brands are malformed, using built-in brand: {}", e);
                None
            }
        }
    }
}

fn validate_brands(brands: &[Brand]) -> Result<(), AppError> {
    let mut seen = HashSet::new();
    for brand in brands {
        if brand.id.trim().is_empty() {
            return Err(AppError::Validation("Brand id must not be empty".into()));
        }
        if !seen.insert(brand.id.as_str()) {
            return Err(AppError::Validation(format!("Duplicate brand id: {}", brand.id)));
        }
    }
    Ok(())
}
