//! Handlers for objective set editing.
//!
//! The objective list of an assignment is always replaced wholesale: one
//! upsert per save, with the set-level draft/submitted status stamped in
//! the same write. Only the assignment's employee may edit, and only while
//! the project is not cancelled.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use talentflow_core::editor::{CatalogSkill, SetEditor};
use talentflow_core::error::CoreError;
use talentflow_core::objective::ObjectiveSetStatus;
use talentflow_core::project::ProjectStatus;
use talentflow_core::types::DbId;
use talentflow_db::models::assignment::AssignmentContext;
use talentflow_db::models::objective_set::{AddCatalogObjective, SaveObjectives};
use talentflow_db::repositories::{AssignmentRepo, ObjectiveSetRepo, SkillRepo, UserRepo};
use talentflow_db::DbPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Load the assignment context for an assignment id or 404.
pub(crate) async fn assignment_context(
    pool: &DbPool,
    assignment_id: DbId,
) -> Result<AssignmentContext, AppError> {
    AssignmentRepo::context_by_assignment(pool, assignment_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Assignment",
                id: assignment_id,
            })
        })
}

/// The assignment's employee is the only writer of its objective set.
fn ensure_owner(ctx: &AssignmentContext, auth: &AuthUser) -> Result<(), AppError> {
    if ctx.employee_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the assignment's employee may edit its objectives".into(),
        )));
    }
    Ok(())
}

/// Objective editing is closed once the project is cancelled.
fn ensure_project_not_cancelled(ctx: &AssignmentContext) -> Result<(), AppError> {
    if ProjectStatus::parse(&ctx.project_status)? == ProjectStatus::Cancelled {
        return Err(AppError::Core(CoreError::StaleState(
            "Objectives cannot be edited on a cancelled project".into(),
        )));
    }
    Ok(())
}

/// PUT /api/v1/assignments/{assignment_id}/objectives
///
/// Create or fully replace the assignment's objective set. With
/// `asDraft = true` the save is lenient (only skill descriptions needed);
/// otherwise every objective must pass its completeness rule and the set
/// is stamped submitted.
pub async fn save_objectives(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(assignment_id): Path<DbId>,
    Json(input): Json<SaveObjectives>,
) -> AppResult<impl IntoResponse> {
    let ctx = assignment_context(&state.pool, assignment_id).await?;
    ensure_owner(&ctx, &auth)?;
    ensure_project_not_cancelled(&ctx)?;

    let editor = SetEditor::new(input.objectives);
    let (objectives, status) = editor.into_objectives(input.as_draft)?;

    let set = ObjectiveSetRepo::upsert(&state.pool, assignment_id, status, &objectives).await?;

    tracing::info!(
        user_id = auth.user_id,
        assignment_id,
        status = status.as_str(),
        objectives = objectives.len(),
        "Objective set saved"
    );

    Ok(Json(DataResponse { data: set }))
}

/// GET /api/v1/assignments/{assignment_id}/objectives
///
/// Read the assignment's objective set. Visible to the employee, the
/// referent, and the employee's coach.
pub async fn get_objectives(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(assignment_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = assignment_context(&state.pool, assignment_id).await?;
    ensure_reader(&state.pool, &ctx, &auth).await?;

    let set = ObjectiveSetRepo::find_by_assignment(&state.pool, assignment_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "ObjectiveSet",
                id: assignment_id,
            })
        })?;

    Ok(Json(DataResponse { data: set }))
}

/// Employee, referent, and the employee's coach may read lifecycle records.
pub(crate) async fn ensure_reader(
    pool: &DbPool,
    ctx: &AssignmentContext,
    auth: &AuthUser,
) -> Result<(), AppError> {
    if auth.user_id == ctx.employee_id || auth.user_id == ctx.referent_id {
        return Ok(());
    }
    let employee = UserRepo::find_by_id(pool, ctx.employee_id).await?;
    if employee.and_then(|u| u.coach_id) == Some(auth.user_id) {
        return Ok(());
    }
    Err(AppError::Core(CoreError::Forbidden(
        "Not a participant of this assignment".into(),
    )))
}

/// POST /api/v1/assignments/{assignment_id}/objectives/catalog
///
/// Append a catalog-linked objective for a skill. Fails with 409 when the
/// skill is already part of the set. The set (created on first use) is
/// saved back as a draft, since the new objective starts with empty SMART
/// fields.
pub async fn add_catalog_objective(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(assignment_id): Path<DbId>,
    Json(input): Json<AddCatalogObjective>,
) -> AppResult<impl IntoResponse> {
    let ctx = assignment_context(&state.pool, assignment_id).await?;
    ensure_owner(&ctx, &auth)?;
    ensure_project_not_cancelled(&ctx)?;

    let skill = SkillRepo::find_by_id(&state.pool, input.skill_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Skill",
                id: input.skill_id,
            })
        })?;

    let existing = ObjectiveSetRepo::find_by_assignment(&state.pool, assignment_id).await?;
    let mut editor = SetEditor::new(existing.map(|s| s.objectives.0).unwrap_or_default());
    editor.add_catalog_objective(&CatalogSkill {
        id: skill.id,
        description: skill.description,
        theme_name: skill.theme_name,
    })?;

    let (objectives, status) = editor.into_objectives(true)?;
    let set = ObjectiveSetRepo::upsert(&state.pool, assignment_id, status, &objectives).await?;

    tracing::info!(
        user_id = auth.user_id,
        assignment_id,
        skill_id = input.skill_id,
        "Catalog objective added"
    );

    Ok((StatusCode::CREATED, Json(DataResponse { data: set })))
}

/// DELETE /api/v1/assignments/{assignment_id}/objectives/{objective_id}
///
/// Remove one objective from the set. Always succeeds, even when the id is
/// absent; a structurally edited set goes back to draft, while removing an
/// absent id leaves the set untouched.
pub async fn remove_objective(
    auth: AuthUser,
    State(state): State<AppState>,
    Path((assignment_id, objective_id)): Path<(DbId, DbId)>,
) -> AppResult<impl IntoResponse> {
    let ctx = assignment_context(&state.pool, assignment_id).await?;
    ensure_owner(&ctx, &auth)?;
    ensure_project_not_cancelled(&ctx)?;

    let existing = ObjectiveSetRepo::find_by_assignment(&state.pool, assignment_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "ObjectiveSet",
                id: assignment_id,
            })
        })?;

    let before = existing.objectives.0.len();
    let mut editor = SetEditor::new(existing.objectives.0.clone());
    editor.remove_objective(objective_id);
    if editor.objectives().len() == before {
        // The id was not in the set; nothing to rewrite or restamp.
        return Ok(Json(DataResponse { data: existing }));
    }
    let objectives = editor.objectives().to_vec();

    // Removal bypasses draft validation: an emptied set is a valid draft.
    let set = ObjectiveSetRepo::upsert(
        &state.pool,
        assignment_id,
        ObjectiveSetStatus::Draft,
        &objectives,
    )
    .await?;

    tracing::info!(
        user_id = auth.user_id,
        assignment_id,
        objective_id,
        "Objective removed"
    );

    Ok(Json(DataResponse { data: set }))
}
