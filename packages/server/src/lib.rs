pub mod config;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod models;
pub mod routes;
pub mod state;

use std::time::Duration;

use axum::http::{HeaderValue, Method, header};
use tower_http::cors::{AllowOrigin, CorsLayer};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable as ScalarServable};
use utoipa_swagger_ui::SwaggerUi;

use crate::config::CorsConfig;
use crate::state::AppState;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Portfolio Content API",
        version = "1.0.0",
        description = "Content resolution API for the portfolio site"
    ),
    paths(
        handlers::project::list_projects,
        handlers::project::get_project,
        handlers::achievement::list_achievements,
        handlers::achievement::get_achievement,
        handlers::blog::list_blog_posts,
        handlers::blog::get_blog_post,
        handlers::profile::get_profile,
        handlers::contact::submit_contact,
    ),
    tags(
        (name = "Projects", description = "Project listings and page resolution"),
        (name = "Achievements", description = "Achievement listings and page resolution"),
        (name = "Blog", description = "Published blog posts and page resolution"),
        (name = "Profile", description = "Author profile"),
        (name = "Contact", description = "Contact form submission"),
    ),
)]
struct ApiDoc;

/// Build the application router.
pub fn build_router(state: AppState) -> axum::Router {
    let cors = cors_layer(&state.config.server.cors);

    axum::Router::new()
        .nest("/api", routes::api_routes())
        .with_state(state)
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .merge(Scalar::with_url("/scalar", ApiDoc::openapi()))
        .layer(cors)
}

fn cors_layer(config: &CorsConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .allow_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([header::CONTENT_TYPE])
        .max_age(Duration::from_secs(config.max_age))
}
