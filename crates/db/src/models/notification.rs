//! In-app notification model.

use serde::Serialize;
use sqlx::FromRow;
use talentflow_core::types::{DbId, Timestamp};

/// A row from the `notifications` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Notification {
    pub id: DbId,
    pub user_id: DbId,
    /// Machine-readable kind, e.g. `"self_evaluation_due"`.
    pub kind: String,
    pub message: String,
    pub is_read: bool,
    pub read_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
