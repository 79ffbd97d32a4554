//! Assignment (project↔employee link) models.

use serde::Serialize;
use sqlx::FromRow;
use talentflow_core::types::{DbId, Timestamp};

/// A row from the `assignments` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Assignment {
    pub id: DbId,
    pub project_id: DbId,
    pub employee_id: DbId,
    pub referent_id: DbId,
    pub created_at: Timestamp,
}

/// An assignment joined with its project's status, as needed by every
/// lifecycle authorization/gating check.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct AssignmentContext {
    pub assignment_id: DbId,
    pub project_id: DbId,
    pub project_status: String,
    pub employee_id: DbId,
    pub referent_id: DbId,
}
