use axum::Json;
use axum::extract::{Path, Query, State};
use content::Resolution;
use content::achievement::Achievement;
use tracing::instrument;

use crate::error::{AppError, ErrorBody};
use crate::models::achievement::*;
use crate::models::shared::matches_tag;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/achievements",
    tag = "Achievements",
    operation_id = "listAchievements",
    summary = "List achievements",
    description = "Returns achievements in their declared order, optionally filtered by featured flag and tag. `sort=date` opts into newest-first ordering instead.",
    params(AchievementListQuery),
    responses(
        (status = 200, description = "List of achievements", body = Vec<AchievementResponse>),
        (status = 400, description = "Invalid sort value (VALIDATION_ERROR)", body = ErrorBody),
    ),
)]
#[instrument(skip(state, query))]
pub async fn list_achievements(
    State(state): State<AppState>,
    Query(query): Query<AchievementListQuery>,
) -> Result<Json<Vec<AchievementResponse>>, AppError> {
    validate_achievement_query(&query)?;

    let mut data: Vec<&Achievement> = state
        .site
        .achievements
        .all()
        .iter()
        .filter(|a| query.featured.is_none_or(|f| a.featured == f))
        .filter(|a| matches_tag(&a.tags, query.tag.as_deref()))
        .collect();

    if query.sort.as_deref() == Some("date") {
        data.sort_by(|a, b| b.date.cmp(&a.date));
    }

    Ok(Json(data.into_iter().map(AchievementResponse::from).collect()))
}

#[utoipa::path(
    get,
    path = "/api/v1/achievements/{slug}",
    tag = "Achievements",
    operation_id = "getAchievement",
    summary = "Resolve an achievement page by slug",
    description = "Returns the achievement summary plus its extended detail record when one exists; `detail: null` otherwise. Only an unknown slug is an error.",
    params(("slug" = String, Path, description = "Achievement slug")),
    responses(
        (status = 200, description = "Resolved achievement page", body = AchievementPageResponse),
        (status = 404, description = "Unknown slug (NOT_FOUND)", body = ErrorBody),
    ),
)]
#[instrument(skip(state))]
pub async fn get_achievement(
    State(state): State<AppState>,
    Path(slug): Path<String>,
) -> Result<Json<AchievementPageResponse>, AppError> {
    match state.site.resolve_achievement(&slug) {
        Resolution::NotFound => Err(AppError::NotFound(format!(
            "Achievement '{slug}' not found"
        ))),
        Resolution::Fallback(achievement) => Ok(Json(AchievementPageResponse {
            achievement: achievement.into(),
            detail: None,
        })),
        Resolution::Rich(achievement, detail) => Ok(Json(AchievementPageResponse {
            achievement: achievement.into(),
            detail: Some(detail.into()),
        })),
    }
}
