use axum::{
    body::Body,
    extract::Request,
    middleware,
    routing::get,
    Router,
};
use std::sync::Arc;
use std::time::Duration;
use crate::state::AppState;
use crate::api::handlers::{brand_admin, health, site};
use crate::api::middleware::brand_context::provide_brand_context;
use tower_http::{
    trace::TraceLayer,
    classify::ServerErrorsFailureClass,
};
use tracing::{info_span, Span, error, info};
use uuid::Uuid;

/// Brand-aware site routes, mounted both normally and under the preview path.
fn site_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/brand", get(site::get_current_brand))
        .route("/theme.css", get(site::get_theme_css))
        .route("/communities", get(site::list_communities))
        .route("/experience", get(site::get_experience))
        .route("/features", get(site::get_features))
        .route("/layout", get(site::get_layout))
}

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health::health_check))

        // Site
        .nest("/api/v1/site", site_routes())

        // Preview
        .route("/preview/brand/{brand_id}", get(site::get_current_brand))
        .nest("/preview/brand/{brand_id}/site", site_routes())

        // Brand Admin
        .route("/api/v1/brands", get(brand_admin::list_brands).put(brand_admin::replace_brands))
        .route("/api/v1/brands/{brand_id}", get(brand_admin::get_brand))

        .layer(middleware::from_fn_with_state(state.clone(), provide_brand_context))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                        brand_id = tracing::field::Empty,
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!("started processing request: {} {}", request.method(), request.uri().path());
                })
                .on_response(|response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                    info!(
                        status = response.status().as_u16(),
                        latency_ms = latency.as_millis(),
                        "finished processing request"
                    );
                })
                .on_failure(|error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                    error!("request failed: {:?}", error);
                })
        )
        .with_state(state)
}
