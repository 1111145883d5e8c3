use axum::{Router, routing::get};

use crate::state::AppState;

pub mod auth;
pub mod doc;
pub mod home;
pub mod movies;

// Build the API router without binding state; it will be provided at the top level.
pub fn create_router() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home_page))
        .merge(auth::router())
        .merge(movies::router())
}
