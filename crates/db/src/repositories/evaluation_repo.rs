//! Repository for the `evaluations` table.
//!
//! Writes follow the single-record-overwrite discipline: one upsert per
//! self-evaluation submission, one update per referent submission. The
//! upsert keyed on `objective_set_id` makes two actors racing to create the
//! same evaluation degrade to an update instead of a duplicate-insert
//! error.

use sqlx::types::Json;
use sqlx::PgPool;
use talentflow_core::evaluation::{EvaluationStatus, ReferentEntry, SelfEntry};
use talentflow_core::types::DbId;

use crate::models::evaluation::Evaluation;

/// Column list for `evaluations` queries.
const COLUMNS: &str = "id, objective_set_id, status, self_entries, self_submitted_at, \
     referent_entries, referent_submitted_at, created_at, updated_at";

pub struct EvaluationRepo;

impl EvaluationRepo {
    /// Find an evaluation by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Evaluation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM evaluations WHERE id = $1");
        sqlx::query_as::<_, Evaluation>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the evaluation belonging to an objective set.
    pub async fn find_by_objective_set(
        pool: &PgPool,
        objective_set_id: DbId,
    ) -> Result<Option<Evaluation>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM evaluations WHERE objective_set_id = $1");
        sqlx::query_as::<_, Evaluation>(&query)
            .bind(objective_set_id)
            .fetch_optional(pool)
            .await
    }

    /// Create or overwrite the self-evaluation for an objective set.
    ///
    /// Sets status to `submittedSelf` and stamps `self_submitted_at` with
    /// the write time; re-submission overwrites the entries in place.
    pub async fn upsert_self(
        pool: &PgPool,
        objective_set_id: DbId,
        entries: &[SelfEntry],
    ) -> Result<Evaluation, sqlx::Error> {
        let query = format!(
            "INSERT INTO evaluations (objective_set_id, status, self_entries, self_submitted_at) \
             VALUES ($1, $2, $3, NOW()) \
             ON CONFLICT (objective_set_id) \
             DO UPDATE SET status = EXCLUDED.status, \
                           self_entries = EXCLUDED.self_entries, \
                           self_submitted_at = NOW(), \
                           updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Evaluation>(&query)
            .bind(objective_set_id)
            .bind(EvaluationStatus::SubmittedSelf.as_str())
            .bind(Json(entries))
            .fetch_one(pool)
            .await
    }

    /// Record (or amend) the referent evaluation on an existing record.
    ///
    /// Sets status to `evaluatedByReferent` and stamps
    /// `referent_submitted_at`.
    pub async fn submit_referent(
        pool: &PgPool,
        evaluation_id: DbId,
        entries: &[ReferentEntry],
    ) -> Result<Evaluation, sqlx::Error> {
        let query = format!(
            "UPDATE evaluations \
             SET status = $2, \
                 referent_entries = $3, \
                 referent_submitted_at = NOW(), \
                 updated_at = NOW() \
             WHERE id = $1 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Evaluation>(&query)
            .bind(evaluation_id)
            .bind(EvaluationStatus::EvaluatedByReferent.as_str())
            .bind(Json(entries))
            .fetch_one(pool)
            .await
    }
}
