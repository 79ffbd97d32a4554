//! Skill catalog model (read-only lookup).

use serde::Serialize;
use sqlx::FromRow;
use talentflow_core::types::{DbId, Timestamp};

/// A row from the `skills` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Skill {
    pub id: DbId,
    pub description: String,
    pub theme_name: String,
    pub created_at: Timestamp,
}
