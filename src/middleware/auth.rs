use axum::{extract::FromRequestParts, http::header};

use crate::{config::AppConfig, dto::auth::Claims, error::AppError, state::AppState, token};

/// Identity asserted by a verified bearer token.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub email: String,
}

/// Reject token bearers whose email claim is not the configured admin
/// address. Comparison is exact and case-sensitive.
pub fn ensure_admin(user: &AuthUser, config: &AppConfig) -> Result<(), AppError> {
    if user.email != config.admin_email {
        return Err(AppError::Forbidden);
    }
    Ok(())
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let auth_header = parts
            .headers
            .get(header::AUTHORIZATION)
            .ok_or_else(|| AppError::InvalidToken("missing Authorization header".into()))?;

        let auth_str = auth_header
            .to_str()
            .map_err(|_| AppError::InvalidToken("invalid Authorization header".into()))?;

        if !auth_str.starts_with("Bearer ") {
            return Err(AppError::InvalidToken("invalid Authorization scheme".into()));
        }
        let bearer = auth_str.trim_start_matches("Bearer ").trim();

        let claims: Claims = token::verify(bearer, &state.config.jwt_secret)?;

        Ok(AuthUser {
            email: claims.email,
        })
    }
}
