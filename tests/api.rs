use axum::{
    Router,
    body::{Body, to_bytes},
    http::{Method, Request, StatusCode, header},
};
use axum_movie_api::{
    config::AppConfig, db::setup_schema, dto::auth::Claims, routes::create_router,
    state::AppState, token,
};
use sea_orm::{ConnectOptions, Database};
use serde_json::{Value, json};
use tower::ServiceExt;

const SECRET: &str = "test_secret";

fn test_config() -> AppConfig {
    AppConfig {
        database_url: "sqlite::memory:".to_string(),
        host: "127.0.0.1".to_string(),
        port: 0,
        jwt_secret: SECRET.to_string(),
        admin_email: "admin@gmail.com".to_string(),
        admin_password: "root".to_string(),
    }
}

async fn setup_app() -> anyhow::Result<Router> {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options.max_connections(1);
    let orm = Database::connect(options).await?;
    setup_schema(&orm).await?;

    let state = AppState {
        orm,
        config: test_config(),
    };
    Ok(create_router().with_state(state))
}

fn json_request(method: Method, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("request built")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("request built")
}

async fn body_json(response: axum::response::Response) -> anyhow::Result<Value> {
    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    Ok(serde_json::from_slice(&bytes)?)
}

fn dune() -> Value {
    json!({
        "title": "Dune",
        "overview": "A desert planet is the key to the galaxy's fate.",
        "year": 2021,
        "rating": 8.0,
        "category": "SciFi",
    })
}

async fn create_movie(app: &Router, payload: Value) -> anyhow::Result<i32> {
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/movies", payload))
        .await?;
    assert_eq!(response.status(), StatusCode::CREATED);

    let body = body_json(response).await?;
    assert_eq!(body["message"], "Movie created");
    Ok(body["movie_id"].as_i64().expect("integer movie id") as i32)
}

#[tokio::test]
async fn home_page_serves_html() -> anyhow::Result<()> {
    let app = setup_app().await?;

    let response = app.oneshot(get_request("/")).await?;
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = to_bytes(response.into_body(), usize::MAX).await?;
    assert!(String::from_utf8_lossy(&bytes).contains("Hello world"));

    Ok(())
}

#[tokio::test]
async fn login_with_admin_credentials_returns_token() -> anyhow::Result<()> {
    let app = setup_app().await?;

    let response = app
        .clone()
        .oneshot(json_request(
            Method::POST,
            "/login",
            json!({ "email": "admin@gmail.com", "password": "root" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await?;
    let bearer = body["token"].as_str().expect("token string");
    assert!(!bearer.is_empty());

    // The issued token opens the protected listing.
    let response = app
        .oneshot(
            Request::builder()
                .uri("/movies")
                .header(header::AUTHORIZATION, format!("Bearer {bearer}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await?, json!([]));

    Ok(())
}

#[tokio::test]
async fn login_with_wrong_credentials_returns_401() -> anyhow::Result<()> {
    let app = setup_app().await?;

    let response = app
        .oneshot(json_request(
            Method::POST,
            "/login",
            json!({ "email": "admin@gmail.com", "password": "guess" }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await?;
    assert_eq!(body["message"], "Invalid email or password");

    Ok(())
}

#[tokio::test]
async fn listing_requires_a_valid_bearer_token() -> anyhow::Result<()> {
    let app = setup_app().await?;

    let response = app.clone().oneshot(get_request("/movies")).await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let response = app
        .oneshot(
            Request::builder()
                .uri("/movies")
                .header(header::AUTHORIZATION, "Bearer not-a-real-token")
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn listing_rejects_non_admin_email_with_403() -> anyhow::Result<()> {
    let app = setup_app().await?;

    // Correctly signed token, wrong identity.
    let claims = Claims {
        email: "user@gmail.com".to_string(),
        password: "root".to_string(),
    };
    let bearer = token::issue(&claims, SECRET)?;

    let response = app
        .oneshot(
            Request::builder()
                .uri("/movies")
                .header(header::AUTHORIZATION, format!("Bearer {bearer}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
async fn create_get_update_delete_flow() -> anyhow::Result<()> {
    let app = setup_app().await?;

    let id = create_movie(&app, dune()).await?;

    let response = app.clone().oneshot(get_request(&format!("/movies/{id}"))).await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["id"].as_i64(), Some(id as i64));
    assert_eq!(body["title"], "Dune");
    assert_eq!(
        body["overview"],
        "A desert planet is the key to the galaxy's fate."
    );
    assert_eq!(body["year"], 2021);
    assert_eq!(body["rating"], 8.0);
    assert_eq!(body["category"], "SciFi");

    let response = app
        .clone()
        .oneshot(json_request(
            Method::PUT,
            &format!("/movies/{id}"),
            json!({
                "title": "Dune: Part Two",
                "overview": "Paul Atreides unites with the Fremen against House Harkonnen.",
                "year": 2024,
                "rating": 8.5,
                "category": "Adventure",
            }),
        ))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["message"], "Movie updated");
    assert_eq!(body["movie_id"].as_i64(), Some(id as i64));

    let response = app.clone().oneshot(get_request(&format!("/movies/{id}"))).await?;
    let body = body_json(response).await?;
    assert_eq!(body["title"], "Dune: Part Two");
    assert_eq!(body["category"], "Adventure");

    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/movies/{id}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    assert_eq!(body["message"], "Movie deleted");

    // Second delete and subsequent get both report not-found.
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri(format!("/movies/{id}"))
                .body(Body::empty())?,
        )
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let response = app.oneshot(get_request(&format!("/movies/{id}"))).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
    let body = body_json(response).await?;
    assert_eq!(body["message"], "Movie not found");

    Ok(())
}

#[tokio::test]
async fn update_of_missing_movie_returns_404() -> anyhow::Result<()> {
    let app = setup_app().await?;

    let response = app
        .oneshot(json_request(Method::PUT, "/movies/41", dune()))
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let body = body_json(response).await?;
    assert_eq!(body["message"], "Movie not found");

    Ok(())
}

#[tokio::test]
async fn create_validates_title_boundaries() -> anyhow::Result<()> {
    let app = setup_app().await?;

    let mut payload = dune();
    payload["title"] = json!("");
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/movies", payload))
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);
    let body = body_json(response).await?;
    assert_eq!(body["errors"][0]["field"], "title");

    let mut payload = dune();
    payload["title"] = json!("a".repeat(51));
    let response = app
        .clone()
        .oneshot(json_request(Method::POST, "/movies", payload))
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    // Both inclusive boundaries are accepted.
    let mut payload = dune();
    payload["title"] = json!("a");
    create_movie(&app, payload).await?;

    let mut payload = dune();
    payload["title"] = json!("a".repeat(50));
    create_movie(&app, payload).await?;

    Ok(())
}

#[tokio::test]
async fn category_search_uses_the_trailing_slash_route() -> anyhow::Result<()> {
    let app = setup_app().await?;

    create_movie(&app, dune()).await?;
    let mut other = dune();
    other["title"] = json!("Arrival");
    other["category"] = json!("Drama");
    create_movie(&app, other).await?;

    let response = app
        .clone()
        .oneshot(get_request("/movies/?category=SciFi"))
        .await?;
    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await?;
    let items = body.as_array().expect("movie array");
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["title"], "Dune");

    // Exact match is case-sensitive.
    let response = app
        .clone()
        .oneshot(get_request("/movies/?category=scifi"))
        .await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    // Category length is bounded like the movie field itself.
    let response = app
        .oneshot(get_request("/movies/?category=ab"))
        .await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn get_movie_rejects_out_of_range_ids() -> anyhow::Result<()> {
    let app = setup_app().await?;

    let response = app.clone().oneshot(get_request("/movies/0")).await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    let response = app.oneshot(get_request("/movies/5000")).await?;
    assert_eq!(response.status(), StatusCode::UNPROCESSABLE_ENTITY);

    Ok(())
}

#[tokio::test]
async fn unknown_routes_fall_through_to_404() -> anyhow::Result<()> {
    let app = setup_app().await?;

    let response = app.oneshot(get_request("/unknown")).await?;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    Ok(())
}
