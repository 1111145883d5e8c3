use sea_orm::ActiveValue::NotSet;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, EntityTrait, QueryFilter, Set, TransactionTrait,
};

use crate::{
    dto::movies::MovieRequest,
    entity::movies::{ActiveModel, Column, Entity as Movies, Model as MovieModel},
    error::{AppError, AppResult},
    models::Movie,
    state::AppState,
};

pub async fn list_movies(state: &AppState) -> AppResult<Vec<Movie>> {
    let movies = Movies::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(movie_from_entity)
        .collect();
    Ok(movies)
}

pub async fn get_movie(state: &AppState, id: i32) -> AppResult<Movie> {
    let movie = Movies::find_by_id(id).one(&state.orm).await?;
    let movie = match movie {
        Some(m) => m,
        None => return Err(AppError::NotFound),
    };
    Ok(movie_from_entity(movie))
}

/// Exact, case-sensitive category match. An empty result is reported as
/// not-found rather than an empty list.
pub async fn get_movies_by_category(state: &AppState, category: &str) -> AppResult<Vec<Movie>> {
    let movies: Vec<Movie> = Movies::find()
        .filter(Column::Category.eq(category))
        .all(&state.orm)
        .await?
        .into_iter()
        .map(movie_from_entity)
        .collect();

    if movies.is_empty() {
        return Err(AppError::NotFound);
    }
    Ok(movies)
}

pub async fn create_movie(state: &AppState, payload: MovieRequest) -> AppResult<Movie> {
    payload.validate()?;

    let active = ActiveModel {
        id: NotSet,
        title: Set(payload.title),
        overview: Set(payload.overview),
        year: Set(payload.year),
        rating: Set(payload.rating),
        category: Set(payload.category),
    };
    let movie = active.insert(&state.orm).await?;

    tracing::info!(movie_id = movie.id, "movie created");

    Ok(movie_from_entity(movie))
}

/// Overwrite every non-id field of an existing row. Runs inside a
/// transaction so a store failure mid-update rolls back on drop.
pub async fn update_movie(state: &AppState, id: i32, payload: MovieRequest) -> AppResult<Movie> {
    payload.validate()?;

    let txn = state.orm.begin().await?;

    let existing = Movies::find_by_id(id).one(&txn).await?;
    let existing = match existing {
        Some(m) => m,
        None => return Err(AppError::NotFound),
    };

    let mut active: ActiveModel = existing.into();
    active.title = Set(payload.title);
    active.overview = Set(payload.overview);
    active.year = Set(payload.year);
    active.rating = Set(payload.rating);
    active.category = Set(payload.category);

    let movie = active.update(&txn).await?;
    txn.commit().await?;

    tracing::info!(movie_id = movie.id, "movie updated");

    Ok(movie_from_entity(movie))
}

/// Remove the row matching the given id and return its identity.
pub async fn delete_movie(state: &AppState, id: i32) -> AppResult<i32> {
    let result = Movies::delete_by_id(id).exec(&state.orm).await?;

    if result.rows_affected == 0 {
        return Err(AppError::NotFound);
    }

    tracing::info!(movie_id = id, "movie deleted");

    Ok(id)
}

fn movie_from_entity(model: MovieModel) -> Movie {
    Movie {
        id: model.id,
        title: model.title,
        overview: model.overview,
        year: model.year,
        rating: model.rating,
        category: model.category,
    }
}
