use axum::Json;
use axum::extract::State;
use tracing::instrument;

use crate::models::profile::ProfileResponse;
use crate::state::AppState;

#[utoipa::path(
    get,
    path = "/api/v1/profile",
    tag = "Profile",
    operation_id = "getProfile",
    summary = "Get the author profile",
    responses(
        (status = 200, description = "Author profile", body = ProfileResponse),
    ),
)]
#[instrument(skip(state))]
pub async fn get_profile(State(state): State<AppState>) -> Json<ProfileResponse> {
    Json(ProfileResponse::from(&state.site.profile))
}
