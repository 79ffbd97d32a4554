//! Handler for the read-only skill catalog lookup.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use talentflow_db::repositories::SkillRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/v1/skills
///
/// The full skill catalog, ordered by theme then description. Used by the
/// objective editor when adding catalog-linked objectives.
pub async fn list_skills(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let skills = SkillRepo::list_all(&state.pool).await?;
    Ok(Json(DataResponse { data: skills }))
}
