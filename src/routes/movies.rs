use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
};

use crate::{
    dto::movies::{CategoryQuery, MessageResponse, MovieList, MovieMutationResponse, MovieRequest},
    error::{AppError, AppResult, FieldError},
    middleware::auth::{AuthUser, ensure_admin},
    models::Movie,
    services::movie_service,
    state::AppState,
};

// `/movies` and `/movies/` are distinct endpoints: the bare path lists the
// whole catalog behind the admin gate, the trailing-slash variant is the
// open category search.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/", get(get_movies_by_category))
        .route(
            "/movies/{id}",
            get(get_movie).put(update_movie).delete(delete_movie),
        )
}

#[utoipa::path(
    get,
    path = "/movies",
    responses(
        (status = 200, description = "All movies", body = MovieList),
        (status = 401, description = "Missing or invalid bearer token"),
        (status = 403, description = "Token does not belong to the admin account"),
    ),
    security(("bearer_auth" = [])),
    tag = "movies"
)]
pub async fn list_movies(
    user: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<MovieList>> {
    ensure_admin(&user, &state.config)?;
    let items = movie_service::list_movies(&state).await?;
    Ok(Json(MovieList { items }))
}

#[utoipa::path(
    get,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID, between 1 and 2000")
    ),
    responses(
        (status = 200, description = "The matching movie", body = Movie),
        (status = 404, description = "Movie not found"),
        (status = 422, description = "ID out of range"),
    ),
    tag = "movies"
)]
pub async fn get_movie(
    Path(id): Path<i32>,
    State(state): State<AppState>,
) -> AppResult<Json<Movie>> {
    if !(1..=2000).contains(&id) {
        return Err(AppError::Validation(vec![FieldError::new(
            "id",
            "must be between 1 and 2000",
        )]));
    }
    let movie = movie_service::get_movie(&state, id).await?;
    Ok(Json(movie))
}

#[utoipa::path(
    get,
    path = "/movies/",
    params(
        ("category" = String, Query, description = "Exact category to match, 3 to 20 characters")
    ),
    responses(
        (status = 200, description = "Movies in the category", body = MovieList),
        (status = 404, description = "No movie in that category"),
        (status = 422, description = "Category length out of range"),
    ),
    tag = "movies"
)]
pub async fn get_movies_by_category(
    Query(query): Query<CategoryQuery>,
    State(state): State<AppState>,
) -> AppResult<Json<MovieList>> {
    let category_len = query.category.chars().count();
    if !(3..=20).contains(&category_len) {
        return Err(AppError::Validation(vec![FieldError::new(
            "category",
            "must be between 3 and 20 characters",
        )]));
    }
    let items = movie_service::get_movies_by_category(&state, &query.category).await?;
    Ok(Json(MovieList { items }))
}

#[utoipa::path(
    post,
    path = "/movies",
    request_body = MovieRequest,
    responses(
        (status = 201, description = "Movie created", body = MovieMutationResponse),
        (status = 422, description = "Field constraint violated"),
    ),
    tag = "movies"
)]
pub async fn create_movie(
    State(state): State<AppState>,
    Json(payload): Json<MovieRequest>,
) -> AppResult<(StatusCode, Json<MovieMutationResponse>)> {
    let movie = movie_service::create_movie(&state, payload).await?;
    Ok((
        StatusCode::CREATED,
        Json(MovieMutationResponse {
            message: "Movie created".to_string(),
            movie_id: movie.id,
        }),
    ))
}

#[utoipa::path(
    put,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    request_body = MovieRequest,
    responses(
        (status = 200, description = "Movie updated", body = MovieMutationResponse),
        (status = 404, description = "Movie not found"),
        (status = 422, description = "Field constraint violated"),
    ),
    tag = "movies"
)]
pub async fn update_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(payload): Json<MovieRequest>,
) -> AppResult<Json<MovieMutationResponse>> {
    let movie = movie_service::update_movie(&state, id, payload).await?;
    Ok(Json(MovieMutationResponse {
        message: "Movie updated".to_string(),
        movie_id: movie.id,
    }))
}

#[utoipa::path(
    delete,
    path = "/movies/{id}",
    params(
        ("id" = i32, Path, description = "Movie ID")
    ),
    responses(
        (status = 200, description = "Movie deleted", body = MessageResponse),
        (status = 404, description = "Movie not found"),
    ),
    tag = "movies"
)]
pub async fn delete_movie(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> AppResult<Json<MessageResponse>> {
    movie_service::delete_movie(&state, id).await?;
    Ok(Json(MessageResponse {
        message: "Movie deleted".to_string(),
    }))
}
