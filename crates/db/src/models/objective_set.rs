//! Objective set row model and save DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use talentflow_core::objective::Objective;
use talentflow_core::types::{DbId, Timestamp};

/// A row from the `objective_sets` table.
///
/// `objectives` is the JSONB array of typed [`Objective`]s; the whole array
/// is replaced on every save.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct ObjectiveSet {
    pub id: DbId,
    pub assignment_id: DbId,
    /// Set-level `draft` | `submitted`, stamped uniformly on save.
    pub status: String,
    pub objectives: Json<Vec<Objective>>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for replacing an assignment's objective list.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveObjectives {
    pub objectives: Vec<Objective>,
    /// `true` saves a draft (lenient validation); `false` submits the set.
    pub as_draft: bool,
}

/// DTO for appending a catalog-linked objective to a set.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddCatalogObjective {
    pub skill_id: DbId,
}
