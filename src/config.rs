use std::env;

pub const DEFAULT_BRAND_STORAGE_KEY: &str = "dtg_brands";
pub const DEFAULT_PREVIEW_PARAM: &str = "preview_brand";

#[derive(Clone, Debug)]
pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub admin_api_token: Option<String>,
    pub brand_storage_key: String, // Settings slot holding the brand JSON array
    pub brand_preview_param: String,
    pub trust_forwarded_host: bool,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            database_url: env::var("DATABASE_URL").expect("DATABASE_URL must be set"),
            port: env::var("PORT").unwrap_or_else(|_| "3000".to_string()).parse().expect("PORT must be a number"),
            admin_api_token: env::var("ADMIN_API_TOKEN").ok().filter(|t| !t.trim().is_empty()),
            brand_storage_key: env::var("BRAND_STORAGE_KEY").unwrap_or_else(|_| DEFAULT_BRAND_STORAGE_KEY.to_string()),
            brand_preview_param: env::var("BRAND_PREVIEW_PARAM").unwrap_or_else(|_| DEFAULT_PREVIEW_PARAM.to_string()),
            trust_forwarded_host: env::var("TRUST_FORWARDED_HOST")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        }
    }
}
