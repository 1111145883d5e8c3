use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, Debug, ToSchema)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

/// Claims carried by an issued token. The login payload is signed as-is;
/// no expiry claim is set.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub email: String,
    pub password: String,
}
