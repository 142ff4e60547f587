use axum::{
    extract::FromRequestParts,
    http::request::Parts,
};
use crate::api::middleware::brand_context::BrandContext;
use crate::error::AppError;

/// The request's brand context. Only available on routes wrapped by
/// `provide_brand_context`; anywhere else extraction fails.
pub struct BrandScope(pub BrandContext);

impl<S> FromRequestParts<S> for BrandScope
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions
            .get::<BrandContext>()
            .cloned()
            .map(BrandScope)
            .ok_or(AppError::BrandContextMissing)
    }
}
