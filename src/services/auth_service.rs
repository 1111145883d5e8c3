use crate::{
    config::AppConfig,
    dto::auth::{Claims, LoginRequest, LoginResponse},
    error::{AppError, AppResult},
    token,
};

/// Check the submitted credentials against the configured admin pair and,
/// on an exact match, sign the login payload into a bearer token. The
/// credentials are never persisted.
pub fn login_user(config: &AppConfig, payload: LoginRequest) -> AppResult<LoginResponse> {
    let LoginRequest { email, password } = payload;

    if email != config.admin_email || password != config.admin_password {
        return Err(AppError::InvalidCredentials);
    }

    let claims = Claims { email, password };
    let token = token::issue(&claims, &config.jwt_secret)?;

    tracing::info!(email = %claims.email, "login succeeded");

    Ok(LoginResponse { token })
}
