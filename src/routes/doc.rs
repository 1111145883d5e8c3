use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginRequest, LoginResponse},
        movies::{MessageResponse, MovieList, MovieMutationResponse, MovieRequest},
    },
    error::FieldError,
    models::Movie,
    routes::{auth, home, movies},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        home::home_page,
        auth::login,
        movies::list_movies,
        movies::get_movie,
        movies::get_movies_by_category,
        movies::create_movie,
        movies::update_movie,
        movies::delete_movie,
    ),
    components(
        schemas(
            Movie,
            MovieRequest,
            MovieList,
            MovieMutationResponse,
            MessageResponse,
            LoginRequest,
            LoginResponse,
            FieldError,
        )
    ),
    security(
        ("bearer_auth" = [])
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "home", description = "Welcome page"),
        (name = "auth", description = "Token issuance"),
        (name = "movies", description = "Movie catalog endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
