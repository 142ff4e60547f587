use downtown_guide::{
    api::router::create_router,
    config::Config,
    domain::{models::{brand::Brand, community::CommunityCatalog}, services::defaults::default_communities},
    infra::repositories::sqlite_settings_repo::SqliteSettingsRepo,
    state::AppState,
};
use axum::{
    body::Body,
    http::{header, Request},
    response::Response,
    Router,
};
use serde_json::Value;
use sqlx::{sqlite::{SqliteConnectOptions, SqlitePoolOptions}, Pool, Sqlite};
use std::str::FromStr;
use std::sync::Arc;
use tower::ServiceExt;
use uuid::Uuid;

#[allow(dead_code)]
pub const ADMIN_TOKEN: &str = "test-admin-token";

#[allow(dead_code)]
pub struct TestApp {
    pub router: Router,
    pub pool: Pool<Sqlite>,
    pub db_filename: String,
    pub state: Arc<AppState>,
}

impl TestApp {
    pub async fn new() -> Self {
        Self::with_config(|_| {}).await
    }

    #[allow(dead_code)]
    pub async fn with_config(adjust: impl FnOnce(&mut Config)) -> Self {
        let db_filename = format!("test_{}.db", Uuid::new_v4());
        let db_url = format!("sqlite://{}?mode=rwc", db_filename);

        let connection_options = SqliteConnectOptions::from_str(&db_url)
            .unwrap()
            .create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .connect_with(connection_options)
            .await
            .expect("Failed to connect to test db");

        sqlx::migrate!("./migrations/sqlite")
            .run(&pool)
            .await
            .expect("Failed to migrate test db");

        let mut config = Config {
            database_url: db_url.clone(),
            port: 0,
            admin_api_token: Some(ADMIN_TOKEN.to_string()),
            brand_storage_key: "dtg_brands".to_string(),
            brand_preview_param: "preview_brand".to_string(),
            trust_forwarded_host: false,
        };
        adjust(&mut config);

        let state = Arc::new(AppState::new(
            config,
            Arc::new(SqliteSettingsRepo::new(pool.clone())),
            CommunityCatalog::new(default_communities()),
        ));

        let router = create_router(state.clone());

        Self {
            router,
            pool,
            db_filename,
            state,
        }
    }

    /// Seeds the registry directly, bypassing the admin API.
    #[allow(dead_code)]
    pub async fn seed_brands(&self, brands: &[Brand]) {
        let outcome = self.state.brand_registry.save_brands(brands).await.expect("invalid seed brands");
        assert!(outcome.is_saved(), "seeding brands was not persisted");
    }

    #[allow(dead_code)]
    pub async fn get(&self, host: &str, uri: &str) -> Response {
        self.router.clone().oneshot(
            Request::builder()
                .method("GET")
                .uri(uri)
                .header(header::HOST, host)
                .body(Body::empty())
                .unwrap()
        ).await.unwrap()
    }
}

impl Drop for TestApp {
    fn drop(&mut self) {
        let _ = std::fs::remove_file(&self.db_filename);
    }
}

#[allow(dead_code)]
pub fn brand(id: &str, domain: &str, active: bool, primary: bool) -> Brand {
    let mut b = Brand::new(id, format!("Brand {}", id), domain);
    b.is_active = active;
    b.is_primary = primary;
    b
}

#[allow(dead_code)]
pub async fn parse_body(response: Response) -> Value {
    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX).await.unwrap();
    match serde_json::from_slice(&bytes) {
        Ok(v) => v,
        Err(e) => panic!("Failed to parse JSON: {:?}. Status: {}. Body: {:?}", e, status, String::from_utf8_lossy(&bytes))
    }
}
