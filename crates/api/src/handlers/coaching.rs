//! Handlers for the coaching aggregation view.
//!
//! Read-only projection over completed evaluations of the coach's
//! coachees, recomputed on every query. The SQL join fetches the candidate
//! rows; all score math and classification happens in
//! `talentflow_core::coaching`.

use axum::extract::State;
use axum::response::IntoResponse;
use axum::Json;

use talentflow_core::coaching::{rollup_average, summarize};
use talentflow_db::models::coaching::{CoacheeRollup, CoachingCandidate, CoachingViewRow};
use talentflow_db::repositories::CoachingRepo;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn to_view_row(candidate: CoachingCandidate) -> CoachingViewRow {
    let scores = summarize(&candidate.self_entries.0, &candidate.referent_entries.0);
    CoachingViewRow {
        evaluation_id: candidate.evaluation_id,
        employee_id: candidate.employee_id,
        employee_name: candidate.employee_name,
        project_id: candidate.project_id,
        project_name: candidate.project_name,
        objectives: candidate.objectives.0,
        self_entries: candidate.self_entries.0,
        referent_entries: candidate.referent_entries.0,
        referent_submitted_at: candidate.referent_submitted_at,
        scores,
        talking_point: scores.alignment.talking_point(),
    }
}

/// GET /api/v1/coaching/rows
///
/// One row per completed evaluation across all coachees of the
/// authenticated coach, with derived scores and the talking-point
/// suggestion.
pub async fn list_rows(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let candidates = CoachingRepo::list_candidates(&state.pool, auth.user_id).await?;
    let rows: Vec<CoachingViewRow> = candidates.into_iter().map(to_view_row).collect();
    Ok(Json(DataResponse { data: rows }))
}

/// GET /api/v1/coaching/rollup
///
/// Per-coachee rollup: average final score, evaluation count, and the most
/// recent referent submission.
pub async fn get_rollup(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let candidates = CoachingRepo::list_candidates(&state.pool, auth.user_id).await?;

    // Candidates arrive with each employee's rows contiguous (sorted by
    // display name, then id); group consecutive runs.
    let mut rollups: Vec<CoacheeRollup> = Vec::new();
    let mut scores: Vec<f64> = Vec::new();

    for candidate in candidates {
        let row = to_view_row(candidate);
        match rollups.last_mut() {
            Some(current) if current.employee_id == row.employee_id => {
                scores.push(row.scores.final_score);
                current.evaluation_count += 1;
                current.average_final_score = rollup_average(&scores);
                if row.referent_submitted_at > current.last_submitted_at {
                    current.last_submitted_at = row.referent_submitted_at;
                }
            }
            _ => {
                scores = vec![row.scores.final_score];
                rollups.push(CoacheeRollup {
                    employee_id: row.employee_id,
                    employee_name: row.employee_name,
                    average_final_score: rollup_average(&scores),
                    evaluation_count: 1,
                    last_submitted_at: row.referent_submitted_at,
                });
            }
        }
    }

    Ok(Json(DataResponse { data: rollups }))
}
