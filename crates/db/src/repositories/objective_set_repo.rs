//! Repository for the `objective_sets` table.

use sqlx::types::Json;
use sqlx::PgPool;
use talentflow_core::objective::{Objective, ObjectiveSetStatus};
use talentflow_core::types::DbId;

use crate::models::objective_set::ObjectiveSet;

/// Column list for `objective_sets` queries.
const COLUMNS: &str = "id, assignment_id, status, objectives, created_at, updated_at";

pub struct ObjectiveSetRepo;

impl ObjectiveSetRepo {
    /// Find an objective set by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<ObjectiveSet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM objective_sets WHERE id = $1");
        sqlx::query_as::<_, ObjectiveSet>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Find the objective set belonging to an assignment.
    pub async fn find_by_assignment(
        pool: &PgPool,
        assignment_id: DbId,
    ) -> Result<Option<ObjectiveSet>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM objective_sets WHERE assignment_id = $1");
        sqlx::query_as::<_, ObjectiveSet>(&query)
            .bind(assignment_id)
            .fetch_optional(pool)
            .await
    }

    /// Create or fully replace the objective set for an assignment.
    ///
    /// The objectives array is overwritten wholesale and the set-level
    /// status stamped in the same single-row write.
    pub async fn upsert(
        pool: &PgPool,
        assignment_id: DbId,
        status: ObjectiveSetStatus,
        objectives: &[Objective],
    ) -> Result<ObjectiveSet, sqlx::Error> {
        let query = format!(
            "INSERT INTO objective_sets (assignment_id, status, objectives) \
             VALUES ($1, $2, $3) \
             ON CONFLICT (assignment_id) \
             DO UPDATE SET status = EXCLUDED.status, \
                           objectives = EXCLUDED.objectives, \
                           updated_at = NOW() \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, ObjectiveSet>(&query)
            .bind(assignment_id)
            .bind(status.as_str())
            .bind(Json(objectives))
            .fetch_one(pool)
            .await
    }
}
