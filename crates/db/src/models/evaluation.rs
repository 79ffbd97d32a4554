//! Evaluation row model and submission DTOs.

use serde::{Deserialize, Serialize};
use sqlx::types::Json;
use sqlx::FromRow;
use talentflow_core::evaluation::{ReferentEntry, SelfEntry};
use talentflow_core::types::{DbId, Timestamp};

/// A row from the `evaluations` table.
///
/// Entry arrays are JSONB full-array overwrites; `status` is one of the
/// `talentflow_core::evaluation::EvaluationStatus` strings.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Evaluation {
    pub id: DbId,
    pub objective_set_id: DbId,
    pub status: String,
    pub self_entries: Json<Vec<SelfEntry>>,
    pub self_submitted_at: Option<Timestamp>,
    pub referent_entries: Json<Vec<ReferentEntry>>,
    pub referent_submitted_at: Option<Timestamp>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// DTO for submitting (or re-submitting) a self-evaluation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitSelfEvaluation {
    pub entries: Vec<SelfEntry>,
}

/// DTO for submitting (or amending) a referent evaluation.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitReferentEvaluation {
    pub entries: Vec<ReferentEntry>,
}
