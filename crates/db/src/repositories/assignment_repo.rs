//! Repository for the `assignments` table.
//!
//! Besides plain lookups, provides the joined [`AssignmentContext`] the
//! lifecycle needs for every authorization and gating check, reachable
//! from whichever record the request is keyed on (assignment, objective
//! set, or evaluation).

use sqlx::PgPool;
use talentflow_core::types::DbId;

use crate::models::assignment::{Assignment, AssignmentContext};

/// Column list for `assignments` queries.
const COLUMNS: &str = "id, project_id, employee_id, referent_id, created_at";

/// Select list for [`AssignmentContext`] joins.
const CONTEXT_COLUMNS: &str = "a.id AS assignment_id, a.project_id, p.status AS project_status, \
     a.employee_id, a.referent_id";

pub struct AssignmentRepo;

impl AssignmentRepo {
    /// Find an assignment by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Assignment>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM assignments WHERE id = $1");
        sqlx::query_as::<_, Assignment>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Assignment context (with project status) by assignment id.
    pub async fn context_by_assignment(
        pool: &PgPool,
        assignment_id: DbId,
    ) -> Result<Option<AssignmentContext>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTEXT_COLUMNS} \
             FROM assignments a \
             JOIN projects p ON p.id = a.project_id \
             WHERE a.id = $1"
        );
        sqlx::query_as::<_, AssignmentContext>(&query)
            .bind(assignment_id)
            .fetch_optional(pool)
            .await
    }

    /// Assignment context by the objective set that belongs to it.
    pub async fn context_by_objective_set(
        pool: &PgPool,
        objective_set_id: DbId,
    ) -> Result<Option<AssignmentContext>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTEXT_COLUMNS} \
             FROM objective_sets os \
             JOIN assignments a ON a.id = os.assignment_id \
             JOIN projects p ON p.id = a.project_id \
             WHERE os.id = $1"
        );
        sqlx::query_as::<_, AssignmentContext>(&query)
            .bind(objective_set_id)
            .fetch_optional(pool)
            .await
    }

    /// Assignment context by the evaluation that belongs to it.
    pub async fn context_by_evaluation(
        pool: &PgPool,
        evaluation_id: DbId,
    ) -> Result<Option<AssignmentContext>, sqlx::Error> {
        let query = format!(
            "SELECT {CONTEXT_COLUMNS} \
             FROM evaluations e \
             JOIN objective_sets os ON os.id = e.objective_set_id \
             JOIN assignments a ON a.id = os.assignment_id \
             JOIN projects p ON p.id = a.project_id \
             WHERE e.id = $1"
        );
        sqlx::query_as::<_, AssignmentContext>(&query)
            .bind(evaluation_id)
            .fetch_optional(pool)
            .await
    }

    /// Ids of all employees assigned to a project (notification fan-out).
    pub async fn employee_ids_for_project(
        pool: &PgPool,
        project_id: DbId,
    ) -> Result<Vec<DbId>, sqlx::Error> {
        sqlx::query_scalar("SELECT employee_id FROM assignments WHERE project_id = $1")
            .bind(project_id)
            .fetch_all(pool)
            .await
    }
}
