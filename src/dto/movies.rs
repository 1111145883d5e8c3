use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::error::{AppError, FieldError};
use crate::models::Movie;

const MAX_YEAR: i32 = 2024;

/// Payload for creating a movie or fully overwriting an existing one.
/// There are no partial-update semantics: every non-id field is required
/// except the rating.
#[derive(Debug, Deserialize, ToSchema)]
pub struct MovieRequest {
    pub title: String,
    pub overview: String,
    pub year: i32,
    pub rating: Option<f64>,
    pub category: String,
}

impl MovieRequest {
    /// Check the field constraints of the movie schema. Lengths are
    /// measured in characters, not bytes.
    pub fn validate(&self) -> Result<(), AppError> {
        let mut errors = Vec::new();

        let title_len = self.title.chars().count();
        if !(1..=50).contains(&title_len) {
            errors.push(FieldError::new(
                "title",
                "must be between 1 and 50 characters",
            ));
        }

        let overview_len = self.overview.chars().count();
        if !(15..=200).contains(&overview_len) {
            errors.push(FieldError::new(
                "overview",
                "must be between 15 and 200 characters",
            ));
        }

        if self.year > MAX_YEAR {
            errors.push(FieldError::new(
                "year",
                format!("must not be later than {MAX_YEAR}"),
            ));
        }

        if let Some(rating) = self.rating {
            if !(1.0..=10.0).contains(&rating) {
                errors.push(FieldError::new("rating", "must be between 1 and 10"));
            }
        }

        let category_len = self.category.chars().count();
        if !(3..=20).contains(&category_len) {
            errors.push(FieldError::new(
                "category",
                "must be between 3 and 20 characters",
            ));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(AppError::Validation(errors))
        }
    }
}

#[derive(Debug, Deserialize, ToSchema)]
pub struct CategoryQuery {
    pub category: String,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(transparent)]
pub struct MovieList {
    #[schema(value_type = Vec<Movie>)]
    pub items: Vec<Movie>,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MovieMutationResponse {
    pub message: String,
    pub movie_id: i32,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}
