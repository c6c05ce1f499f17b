use axum::{
    Router,
    routing::{get, post},
};

use crate::handlers;
use crate::state::AppState;

pub fn routes() -> Router<AppState> {
    Router::new()
        .nest("/projects", project_routes())
        .nest("/achievements", achievement_routes())
        .nest("/blog", blog_routes())
        .route("/profile", get(handlers::profile::get_profile))
        .route("/contact", post(handlers::contact::submit_contact))
}

fn project_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::project::list_projects))
        .route("/{slug}", get(handlers::project::get_project))
}

fn achievement_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::achievement::list_achievements))
        .route("/{slug}", get(handlers::achievement::get_achievement))
}

fn blog_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(handlers::blog::list_blog_posts))
        .route("/{slug}", get(handlers::blog::get_blog_post))
}
