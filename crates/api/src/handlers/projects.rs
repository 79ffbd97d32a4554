//! Handlers for the project-finished transition.
//!
//! Project management is out of scope; the lifecycle only needs the
//! transition to finished, which opens self-evaluation and triggers the
//! notification fan-out via the event bus.

use axum::extract::{Path, State};
use axum::response::IntoResponse;
use axum::Json;

use talentflow_core::error::CoreError;
use talentflow_core::project::ProjectStatus;
use talentflow_core::types::DbId;
use talentflow_db::repositories::ProjectRepo;
use talentflow_events::{DomainEvent, PROJECT_FINISHED};

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// POST /api/v1/projects/{project_id}/finish
///
/// Transition an active project to finished and publish the
/// `project.finished` event. Restricted to coaches and admins. The
/// notification fan-out runs in the background; its outcome is not part of
/// this response.
pub async fn finish_project(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(project_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if auth.role != "coach" && auth.role != "admin" {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only coaches and admins may finish a project".into(),
        )));
    }

    let project = ProjectRepo::find_by_id(&state.pool, project_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Project",
                id: project_id,
            })
        })?;

    if ProjectStatus::parse(&project.status)? != ProjectStatus::Active {
        return Err(AppError::Core(CoreError::StaleState(format!(
            "Project is already {}",
            project.status
        ))));
    }

    let project = ProjectRepo::mark_finished(&state.pool, project_id)
        .await?
        .ok_or_else(|| {
            // Lost a race with another finisher between the read and the update.
            AppError::Core(CoreError::StaleState("Project is no longer active".into()))
        })?;

    state.event_bus.publish(
        DomainEvent::new(PROJECT_FINISHED)
            .with_source("project", project_id)
            .with_actor(auth.user_id),
    );

    tracing::info!(user_id = auth.user_id, project_id, "Project finished");

    Ok(Json(DataResponse { data: project }))
}
