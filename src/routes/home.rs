use axum::response::Html;

#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "Welcome page", body = String, content_type = "text/html")
    ),
    tag = "home"
)]
pub async fn home_page() -> Html<&'static str> {
    Html("<h1>Hello world</h1>")
}
