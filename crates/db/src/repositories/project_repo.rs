//! Repository for the `projects` table.

use sqlx::PgPool;
use talentflow_core::types::DbId;

use crate::models::project::Project;

/// Column list for `projects` queries.
const COLUMNS: &str = "id, name, status, created_at, updated_at";

pub struct ProjectRepo;

impl ProjectRepo {
    /// Find a project by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM projects WHERE id = $1");
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// Transition an active project to finished.
    ///
    /// Returns the updated row, or `None` when the project is not currently
    /// active (the caller distinguishes not-found from wrong-state).
    pub async fn mark_finished(pool: &PgPool, id: DbId) -> Result<Option<Project>, sqlx::Error> {
        let query = format!(
            "UPDATE projects \
             SET status = 'finished', updated_at = NOW() \
             WHERE id = $1 AND status = 'active' \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Project>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }
}
