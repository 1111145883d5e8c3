use jsonwebtoken::{Algorithm, DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Serialize, de::DeserializeOwned};

use crate::error::{AppError, AppResult};

/// Sign an arbitrary claims mapping into a compact HS256 token.
///
/// No expiry claim is added; an issued token stays valid until the
/// signing secret changes.
pub fn issue<T: Serialize>(claims: &T, secret: &str) -> AppResult<String> {
    let token = encode(
        &Header::new(Algorithm::HS256),
        claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .map_err(|e| AppError::Internal(anyhow::anyhow!(e.to_string())))?;
    Ok(token)
}

/// Decode and signature-check a token, returning the claims it carries.
///
/// Fails with [`AppError::InvalidToken`] when the structure is malformed
/// or the signature does not match the secret. Tokens are not required to
/// carry an `exp` claim.
pub fn verify<T: DeserializeOwned>(token: &str, secret: &str) -> AppResult<T> {
    let mut validation = Validation::new(Algorithm::HS256);
    validation.required_spec_claims.clear();
    validation.validate_exp = false;

    let data = decode::<T>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &validation,
    )
    .map_err(|e| AppError::InvalidToken(e.to_string()))?;
    Ok(data.claims)
}
