//! Handlers for the self- and referent-evaluation lifecycle.
//!
//! The evaluation record is created lazily on the first self-evaluation
//! submission via an upsert keyed on the objective set, so two racing
//! creators degrade to an update. Every submission is one atomic
//! single-record write.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;

use talentflow_core::error::CoreError;
use talentflow_core::evaluation::{
    ensure_referent_submittable, ensure_self_submittable, validate_referent_entries,
    validate_self_entries, EvaluationStatus,
};
use talentflow_core::objective::ObjectiveSetStatus;
use talentflow_core::project::ProjectStatus;
use talentflow_core::types::DbId;
use talentflow_db::models::evaluation::{SubmitReferentEvaluation, SubmitSelfEvaluation};
use talentflow_db::repositories::{AssignmentRepo, EvaluationRepo, ObjectiveSetRepo};

use crate::error::{AppError, AppResult};
use crate::handlers::objectives::ensure_reader;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// PUT /api/v1/objective-sets/{objective_set_id}/self-evaluation
///
/// Submit (or re-submit) the employee's self-evaluation. Requires a
/// finished project, a submitted objective set, and no referent evaluation
/// yet. Entries must mirror the objective list 1:1 in order.
pub async fn submit_self_evaluation(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(objective_set_id): Path<DbId>,
    Json(input): Json<SubmitSelfEvaluation>,
) -> AppResult<impl IntoResponse> {
    let set = ObjectiveSetRepo::find_by_id(&state.pool, objective_set_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "ObjectiveSet",
                id: objective_set_id,
            })
        })?;
    let ctx = AssignmentRepo::context_by_objective_set(&state.pool, objective_set_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Assignment",
                id: set.assignment_id,
            })
        })?;

    if ctx.employee_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the assignment's employee may self-evaluate".into(),
        )));
    }

    let existing = EvaluationRepo::find_by_objective_set(&state.pool, objective_set_id).await?;
    let existing_status = existing
        .as_ref()
        .map(|e| EvaluationStatus::parse(&e.status))
        .transpose()?;

    ensure_self_submittable(
        ProjectStatus::parse(&ctx.project_status)?,
        ObjectiveSetStatus::parse(&set.status)?,
        existing_status,
    )?;
    validate_self_entries(&set.objectives.0, &input.entries)?;

    let created = existing.is_none();
    let evaluation =
        EvaluationRepo::upsert_self(&state.pool, objective_set_id, &input.entries).await?;

    tracing::info!(
        user_id = auth.user_id,
        objective_set_id,
        evaluation_id = evaluation.id,
        created,
        "Self-evaluation submitted"
    );

    let status = if created {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };
    Ok((status, Json(DataResponse { data: evaluation })))
}

/// PUT /api/v1/evaluations/{evaluation_id}/referent-evaluation
///
/// Submit (or amend) the referent's counter-evaluation. Requires a
/// submitted self-evaluation on the same record; entries must mirror the
/// self entries 1:1 in order.
pub async fn submit_referent_evaluation(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(evaluation_id): Path<DbId>,
    Json(input): Json<SubmitReferentEvaluation>,
) -> AppResult<impl IntoResponse> {
    let evaluation = EvaluationRepo::find_by_id(&state.pool, evaluation_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Evaluation",
                id: evaluation_id,
            })
        })?;
    let ctx = AssignmentRepo::context_by_evaluation(&state.pool, evaluation_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Evaluation",
                id: evaluation_id,
            })
        })?;

    if ctx.referent_id != auth.user_id {
        return Err(AppError::Core(CoreError::Forbidden(
            "Only the assignment's referent may counter-evaluate".into(),
        )));
    }

    ensure_referent_submittable(EvaluationStatus::parse(&evaluation.status)?)?;
    validate_referent_entries(&evaluation.self_entries.0, &input.entries)?;

    let evaluation =
        EvaluationRepo::submit_referent(&state.pool, evaluation_id, &input.entries).await?;

    tracing::info!(
        user_id = auth.user_id,
        evaluation_id,
        "Referent evaluation submitted"
    );

    Ok(Json(DataResponse { data: evaluation }))
}

/// GET /api/v1/evaluations/{evaluation_id}
///
/// Read an evaluation with both entry arrays. The referent reads the
/// parallel self entries for context. Visible to the employee, the
/// referent, and the employee's coach.
pub async fn get_evaluation(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(evaluation_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let evaluation = EvaluationRepo::find_by_id(&state.pool, evaluation_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Evaluation",
                id: evaluation_id,
            })
        })?;
    let ctx = AssignmentRepo::context_by_evaluation(&state.pool, evaluation_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Evaluation",
                id: evaluation_id,
            })
        })?;
    ensure_reader(&state.pool, &ctx, &auth).await?;

    Ok(Json(DataResponse { data: evaluation }))
}

/// GET /api/v1/objective-sets/{objective_set_id}/evaluation
///
/// Read the evaluation attached to an objective set, if any.
pub async fn get_evaluation_for_set(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(objective_set_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let ctx = AssignmentRepo::context_by_objective_set(&state.pool, objective_set_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "ObjectiveSet",
                id: objective_set_id,
            })
        })?;
    ensure_reader(&state.pool, &ctx, &auth).await?;

    let evaluation = EvaluationRepo::find_by_objective_set(&state.pool, objective_set_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFound {
                entity: "Evaluation",
                id: objective_set_id,
            })
        })?;

    Ok(Json(DataResponse { data: evaluation }))
}
