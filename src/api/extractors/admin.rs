use axum::{
    extract::{FromRequestParts, FromRef},
    http::{header, request::Parts},
};
use crate::error::AppError;
use crate::state::AppState;
use std::sync::Arc;
use subtle::ConstantTimeEq;
use tracing::warn;

/// Brand administration guard: `Authorization: Bearer <ADMIN_API_TOKEN>`.
pub struct AdminAccess;

impl<S> FromRequestParts<S> for AdminAccess
where
    S: Send + Sync,
    Arc<AppState>: FromRef<S>,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let app_state = <Arc<AppState> as FromRef<S>>::from_ref(state);

        let expected = app_state.config.admin_api_token.as_deref()
            .ok_or_else(|| AppError::Forbidden("Brand administration is disabled".into()))?;

        let presented = parts.headers.get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(|v| v.strip_prefix("Bearer "))
            .ok_or(AppError::Unauthorized)?;

        if !bool::from(presented.as_bytes().ct_eq(expected.as_bytes())) {
            warn!("Rejected brand administration request with invalid token");
            return Err(AppError::Forbidden("Invalid admin token".into()));
        }

        Ok(AdminAccess)
    }
}
