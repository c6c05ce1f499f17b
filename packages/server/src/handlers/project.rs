use axum::Json;
use axum::extract::{Path, Query, State};
use content::Resolution;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::project::*;
use crate::models::shared::matches_category;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/projects",
    tag = "Projects",
    operation_id = "listProjects",
    summary = "List projects",
    description = "Returns projects in their declared order, optionally filtered by featured flag and category. `category=All` disables the category filter.",
    params(ProjectListQuery),
    responses(
        (status = 200, description = "List of projects", body = Vec<ProjectResponse>),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_projects(
    State(state): State<AppState>,
    Query(query): Query<ProjectListQuery>,
) -> Result<Json<Vec<ProjectResponse>>, AppError> {
    let data: Vec<ProjectResponse> = state
        .site
        .projects
        .all()
        .iter()
        .filter(|p| query.featured.is_none_or(|f| p.featured == f))
        .filter(|p| matches_category(&p.category, query.category.as_deref()))
        .map(ProjectResponse::from)
        .collect();

    Ok(Json(data))
}

#[utoipa::path(
    get,
    path = "/api/v1/projects/{slug}",
    tag = "Projects",
    operation_id = "getProject",
    summary = "Resolve a project page by slug",
    description = "Returns the project summary plus its extended detail record when one exists. A project without extended content is returned with `detail: null`; only an unknown slug is an error.",
    params(("slug" = String, Path, description = "Project slug")),
    responses(
        (status = 200, description = "Resolved project page", body = ProjectPageResponse),
        (status = 404, description = "Unknown slug (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_project(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<ProjectPageResponse>, AppError> {
    match state.site.resolve_project(&slug) {
        Resolution::NotFound => Err(AppError::NotFound(format!("Project '{slug}' not found"))),
        Resolution::Fallback(project) => Ok(Json(ProjectPageResponse {
            project: project.into(),
            detail: None,
        })),
        Resolution::Rich(project, detail) => Ok(Json(ProjectPageResponse {
            project: project.into(),
            detail: Some(detail.into()),
        })),
    }
}
