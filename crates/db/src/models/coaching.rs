//! Coaching aggregation models.
//!
//! [`CoachingCandidate`] is the raw join row fetched per coach;
//! [`CoachingViewRow`] and [`CoacheeRollup`] are the derived shapes the API
//! returns. Nothing here is persisted; the view is recomputed per query.

use serde::Serialize;
use sqlx::types::Json;
use sqlx::FromRow;
use talentflow_core::coaching::ScoreSummary;
use talentflow_core::evaluation::{ReferentEntry, SelfEntry};
use talentflow_core::objective::Objective;
use talentflow_core::types::{DbId, Timestamp};

/// Join row for one completed evaluation of one coachee.
#[derive(Debug, Clone, FromRow)]
pub struct CoachingCandidate {
    pub evaluation_id: DbId,
    pub status: String,
    pub self_entries: Json<Vec<SelfEntry>>,
    pub referent_entries: Json<Vec<ReferentEntry>>,
    pub referent_submitted_at: Option<Timestamp>,
    pub objective_set_id: DbId,
    pub objectives: Json<Vec<Objective>>,
    pub employee_id: DbId,
    pub employee_name: String,
    pub project_id: DbId,
    pub project_name: String,
}

/// One row of the coaching view: denormalized identities, both entry
/// arrays, and the derived scores.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoachingViewRow {
    pub evaluation_id: DbId,
    pub employee_id: DbId,
    pub employee_name: String,
    pub project_id: DbId,
    pub project_name: String,
    pub objectives: Vec<Objective>,
    pub self_entries: Vec<SelfEntry>,
    pub referent_entries: Vec<ReferentEntry>,
    pub referent_submitted_at: Option<Timestamp>,
    #[serde(flatten)]
    pub scores: ScoreSummary,
    /// Fixed talking-point template selected by the alignment
    /// classification.
    pub talking_point: &'static str,
}

/// Per-coachee rollup across all their coaching view rows.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoacheeRollup {
    pub employee_id: DbId,
    pub employee_name: String,
    pub average_final_score: f64,
    pub evaluation_count: usize,
    pub last_submitted_at: Option<Timestamp>,
}
