use axum::{
    extract::{OriginalUri, Query, Request, State},
    http::{header, HeaderMap, Uri},
    middleware::Next,
    response::Response,
};
use std::collections::HashMap;
use std::sync::Arc;
use tracing::{debug, Span};

use crate::config::Config;
use crate::domain::models::brand::Brand;
use crate::domain::services::brand_registry::{BrandRegistry, PersistOutcome};
use crate::domain::services::brand_resolver::{primary_brand, resolve, BrandRequest, MatchRule};
use crate::domain::services::defaults::builtin_brand;
use crate::error::AppError;
use crate::state::AppState;

/// The brand governing one request, plus the registry view it was resolved
/// against. Lives in request extensions for the lifetime of the request.
#[derive(Clone)]
pub struct BrandContext {
    current_brand: Brand,
    matched_by: MatchRule,
    brands: Vec<Brand>,
    primary_brand: Brand,
    registry: Arc<BrandRegistry>,
}

impl BrandContext {
    pub async fn load(registry: Arc<BrandRegistry>, request: &BrandRequest) -> Self {
        let brands = registry.all_brands().await;
        let resolution = resolve(request, &brands);
        let primary_brand = primary_brand(&brands);

        Self {
            current_brand: resolution.brand,
            matched_by: resolution.matched_by,
            brands,
            primary_brand,
            registry,
        }
    }

    pub fn current_brand(&self) -> &Brand {
        &self.current_brand
    }

    pub fn matched_by(&self) -> MatchRule {
        self.matched_by
    }

    /// Overrides the resolved brand without resolving again.
    pub fn set_current_brand(&mut self, brand: Brand) {
        self.current_brand = brand;
    }

    pub fn brands(&self) -> &[Brand] {
        &self.brands
    }

    /// Persists a new brand set through the registry and refreshes this view.
    pub async fn set_brands(&mut self, brands: Vec<Brand>) -> Result<PersistOutcome, AppError> {
        let outcome = self.registry.save_brands(&brands).await?;

        self.brands = if brands.is_empty() { vec![builtin_brand()] } else { brands };
        self.primary_brand = primary_brand(&self.brands);
        Ok(outcome)
    }

    pub fn primary_brand(&self) -> &Brand {
        &self.primary_brand
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

/// Reads host, path and preview parameter from a request. Anything
/// unreadable counts as absent.
pub fn brand_request(config: &Config, headers: &HeaderMap, uri: &Uri) -> BrandRequest {
    let forwarded = if config.trust_forwarded_host {
        header_str(headers, "x-forwarded-host").and_then(|v| v.split(',').next())
    } else {
        None
    };

    let host = forwarded
        .or_else(|| header_str(headers, header::HOST.as_str()))
        .or_else(|| uri.host())
        .unwrap_or_default();

    let preview = Query::<HashMap<String, String>>::try_from_uri(uri)
        .ok()
        .and_then(|Query(mut params)| params.remove(&config.brand_preview_param));

    BrandRequest::new(host, uri.path(), preview)
}

pub async fn provide_brand_context(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let uri = request
        .extensions()
        .get::<OriginalUri>()
        .map(|original| original.0.clone())
        .unwrap_or_else(|| request.uri().clone());

    let brand_request = brand_request(&state.config, request.headers(), &uri);
    let context = BrandContext::load(state.brand_registry.clone(), &brand_request).await;

    Span::current().record("brand_id", context.current_brand().id.as_str());
    debug!(
        host = %brand_request.host,
        brand_id = %context.current_brand().id,
        matched_by = ?context.matched_by(),
        "Brand resolved"
    );

    request.extensions_mut().insert(context);
    next.run(request).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    fn config(trust_forwarded_host: bool) -> Config {
        Config {
            database_url: "sqlite::memory:".to_string(),
            port: 0,
            admin_api_token: None,
            brand_storage_key: "dtg_brands".to_string(),
            brand_preview_param: "preview_brand".to_string(),
            trust_forwarded_host,
        }
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_static(*value));
        }
        map
    }

    #[test]
    fn test_reads_host_path_and_preview() {
        let uri: Uri = "/preview/brand/x?preview_brand=y&other=1".parse().unwrap();
        let request = brand_request(&config(false), &headers(&[("host", "Shop.Example.com:8080")]), &uri);

        assert_eq!(request.host, "shop.example.com");
        assert_eq!(request.path, "/preview/brand/x");
        assert_eq!(request.preview.as_deref(), Some("y"));
    }

    #[test]
    fn test_forwarded_host_only_when_trusted() {
        let uri: Uri = "/".parse().unwrap();
        let h = headers(&[("host", "internal:3000"), ("x-forwarded-host", "city.example.com, proxy.local")]);

        assert_eq!(brand_request(&config(false), &h, &uri).host, "internal");
        assert_eq!(brand_request(&config(true), &h, &uri).host, "city.example.com");
    }

    #[test]
    fn test_falls_back_to_uri_authority() {
        let uri: Uri = "http://Fallback.example.com/x".parse().unwrap();
        let request = brand_request(&config(false), &HeaderMap::new(), &uri);
        assert_eq!(request.host, "fallback.example.com");
    }
}
