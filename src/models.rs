use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A movie row as stored and as returned to clients. The id is assigned
/// by the store on insert and never changes afterwards.
#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct Movie {
    pub id: i32,
    pub title: String,
    pub overview: String,
    pub year: i32,
    pub rating: Option<f64>,
    pub category: String,
}
