use std::sync::Arc;
use crate::config::Config;
use crate::domain::models::community::CommunityCatalog;
use crate::domain::ports::SettingsRepository;
use crate::domain::services::brand_registry::BrandRegistry;

#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub brand_registry: Arc<BrandRegistry>,
    pub communities: Arc<CommunityCatalog>,
}

impl AppState {
    pub fn new(config: Config, settings_repo: Arc<dyn SettingsRepository>, communities: CommunityCatalog) -> Self {
        let brand_registry = Arc::new(BrandRegistry::new(settings_repo, config.brand_storage_key.clone()));
        Self {
            config,
            brand_registry,
            communities: Arc::new(communities),
        }
    }
}
