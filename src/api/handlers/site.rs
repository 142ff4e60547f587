use axum::{
    extract::{Query, State},
    http::header,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;
use crate::api::dtos::{
    requests::ExperienceQuery,
    responses::{CurrentBrandResponse, ExperienceResponse, LayoutResponse},
};
use crate::api::extractors::brand::BrandScope;
use crate::domain::models::community::Community;
use crate::domain::services::defaults::{default_experience, default_page_layout};
use crate::domain::services::theme::{apply_brand_styling, ThemeTokens};
use crate::error::AppError;
use crate::state::AppState;

pub async fn get_current_brand(
    BrandScope(context): BrandScope,
) -> impl IntoResponse {
    Json(CurrentBrandResponse {
        brand: context.current_brand().clone(),
        matched_by: context.matched_by(),
        primary_brand_id: context.primary_brand().id.clone(),
    })
}

pub async fn get_theme_css(
    BrandScope(context): BrandScope,
) -> impl IntoResponse {
    let mut theme = ThemeTokens::new();
    apply_brand_styling(Some(&mut theme), context.current_brand());

    ([(header::CONTENT_TYPE, "text/css; charset=utf-8")], theme.to_css())
}

pub async fn list_communities(
    State(state): State<Arc<AppState>>,
    BrandScope(context): BrandScope,
) -> impl IntoResponse {
    let communities: Vec<Community> = state.communities
        .for_brand(context.current_brand())
        .into_iter()
        .cloned()
        .collect();
    Json(communities)
}

pub async fn get_experience(
    State(state): State<Arc<AppState>>,
    BrandScope(context): BrandScope,
    Query(query): Query<ExperienceQuery>,
) -> Result<impl IntoResponse, AppError> {
    let brand = context.current_brand();
    let available = state.communities.for_brand(brand);

    let community = match query.community {
        Some(id) => available.iter()
            .find(|c| c.id == id)
            .copied()
            .ok_or_else(|| AppError::NotFound(format!("Community not available: {}", id)))?,
        None => available.first()
            .copied()
            .ok_or_else(|| AppError::NotFound("Brand has no communities".into()))?,
    };

    let experience = brand.experience.clone().unwrap_or_else(default_experience);

    Ok(Json(ExperienceResponse {
        community: community.clone(),
        experience: experience.render(&community.name),
    }))
}

pub async fn get_features(
    BrandScope(context): BrandScope,
) -> impl IntoResponse {
    Json(context.current_brand().features.clone())
}

pub async fn get_layout(
    BrandScope(context): BrandScope,
) -> impl IntoResponse {
    let layout = context.current_brand().page_layout.clone().unwrap_or_else(default_page_layout);
    Json(LayoutResponse {
        sections: layout.enabled_sections().into_iter().map(String::from).collect(),
    })
}
