//! Repository for the `skills` catalog (read-only lookup).

use sqlx::PgPool;
use talentflow_core::types::DbId;

use crate::models::skill::Skill;

/// Column list for `skills` queries.
const COLUMNS: &str = "id, description, theme_name, created_at";

pub struct SkillRepo;

impl SkillRepo {
    /// Find a catalog skill by id.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills WHERE id = $1");
        sqlx::query_as::<_, Skill>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List the full skill catalog, grouped for display.
    pub async fn list_all(pool: &PgPool) -> Result<Vec<Skill>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM skills ORDER BY theme_name, description");
        sqlx::query_as::<_, Skill>(&query).fetch_all(pool).await
    }
}
