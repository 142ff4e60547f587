use axum::{extract::{State, Path}, response::IntoResponse, Json};
use std::sync::Arc;
use tracing::info;
use crate::api::dtos::responses::ReplaceBrandsResponse;
use crate::api::extractors::{admin::AdminAccess, brand::BrandScope};
use crate::domain::models::brand::Brand;
use crate::error::AppError;
use crate::state::AppState;

pub async fn list_brands(
    State(state): State<Arc<AppState>>,
    _admin: AdminAccess,
) -> impl IntoResponse {
    Json(state.brand_registry.all_brands().await)
}

pub async fn get_brand(
    State(state): State<Arc<AppState>>,
    _admin: AdminAccess,
    Path(brand_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let brand = state.brand_registry.brand_by_id(&brand_id).await
        .ok_or(AppError::NotFound("Brand not found".into()))?;
    Ok(Json(brand))
}

pub async fn replace_brands(
    _admin: AdminAccess,
    BrandScope(mut context): BrandScope,
    Json(payload): Json<Vec<Brand>>,
) -> Result<impl IntoResponse, AppError> {
    let persist = context.set_brands(payload).await?;

    // Keep serving the same tenant with its edited record, or the new
    // primary when that tenant is gone from the set.
    let refreshed = context.brands()
        .iter()
        .find(|b| b.id == context.current_brand().id)
        .cloned()
        .unwrap_or_else(|| context.primary_brand().clone());
    context.set_current_brand(refreshed);

    info!(count = context.brands().len(), saved = persist.is_saved(), "Brand registry replaced");

    Ok(Json(ReplaceBrandsResponse {
        persist,
        count: context.brands().len(),
        current_brand: context.current_brand().clone(),
    }))
}
