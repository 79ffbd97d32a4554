//! User directory model (administered outside the core).

use serde::Serialize;
use sqlx::FromRow;
use talentflow_core::types::{DbId, Timestamp};

/// A row from the `users` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub display_name: String,
    pub role: String,
    /// The employee's coach, if one is assigned.
    pub coach_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}
