//! Evaluation state machine and entry validation.
//!
//! One evaluation exists per objective set, created lazily on the first
//! self-evaluation submission. The employee's self entries and the
//! referent's counter-entries are full-array overwrites, validated here
//! before the single-record write happens in the db layer.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::objective::{Objective, ObjectiveSetStatus};
use crate::project::ProjectStatus;
use crate::types::DbId;

/// Lowest allowed score for an objective.
pub const SCORE_MIN: i16 = 1;
/// Highest allowed score for an objective.
pub const SCORE_MAX: i16 = 5;

/* --------------------------------------------------------------------------
   Status
   -------------------------------------------------------------------------- */

/// Lifecycle states of an evaluation record.
///
/// `Finalized` and `Rejected` are terminal states reserved for the HR
/// closing process; no core operation writes them, but the coaching
/// aggregator includes them since the referent evaluation they carry is
/// complete.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EvaluationStatus {
    DraftSelf,
    SubmittedSelf,
    AwaitingReferent,
    EvaluatedByReferent,
    Finalized,
    Rejected,
}

impl EvaluationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            EvaluationStatus::DraftSelf => "draftSelf",
            EvaluationStatus::SubmittedSelf => "submittedSelf",
            EvaluationStatus::AwaitingReferent => "awaitingReferent",
            EvaluationStatus::EvaluatedByReferent => "evaluatedByReferent",
            EvaluationStatus::Finalized => "finalized",
            EvaluationStatus::Rejected => "rejected",
        }
    }

    /// Parse a status string as stored in the `evaluations.status` column.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "draftSelf" => Ok(EvaluationStatus::DraftSelf),
            "submittedSelf" => Ok(EvaluationStatus::SubmittedSelf),
            "awaitingReferent" => Ok(EvaluationStatus::AwaitingReferent),
            "evaluatedByReferent" => Ok(EvaluationStatus::EvaluatedByReferent),
            "finalized" => Ok(EvaluationStatus::Finalized),
            "rejected" => Ok(EvaluationStatus::Rejected),
            other => Err(CoreError::Internal(format!(
                "Unknown evaluation status '{other}'"
            ))),
        }
    }

    /// Position in the lifecycle, used for "status at least X" checks.
    pub fn rank(&self) -> u8 {
        match self {
            EvaluationStatus::DraftSelf => 0,
            EvaluationStatus::SubmittedSelf => 1,
            EvaluationStatus::AwaitingReferent => 2,
            EvaluationStatus::EvaluatedByReferent => 3,
            EvaluationStatus::Finalized => 4,
            EvaluationStatus::Rejected => 4,
        }
    }

    /// Whether a referent evaluation has been recorded.
    pub fn has_referent_evaluation(&self) -> bool {
        self.rank() >= EvaluationStatus::EvaluatedByReferent.rank()
    }
}

/* --------------------------------------------------------------------------
   Entries
   -------------------------------------------------------------------------- */

/// Employee's per-objective self-evaluation entry.
///
/// `comment`, `achievements`, and `learnings` are mandatory narrative
/// fields; `difficulties` and `next_steps` are optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SelfEntry {
    pub objective_id: DbId,
    pub score: i16,
    pub comment: String,
    pub achievements: String,
    pub difficulties: Option<String>,
    pub learnings: String,
    pub next_steps: Option<String>,
}

/// Referent's per-objective counter-evaluation entry.
///
/// `comment`, `observed_achievements`, and `overall_performance` are
/// mandatory; `areas_for_improvement` and `development_recommendations` are
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferentEntry {
    pub objective_id: DbId,
    pub score: i16,
    pub comment: String,
    pub observed_achievements: String,
    pub areas_for_improvement: Option<String>,
    pub development_recommendations: Option<String>,
    pub overall_performance: String,
}

fn check_score(score: i16, position: usize) -> Result<(), CoreError> {
    if !(SCORE_MIN..=SCORE_MAX).contains(&score) {
        return Err(CoreError::Validation(format!(
            "Entry {position}: score must be between {SCORE_MIN} and {SCORE_MAX}, got {score}"
        )));
    }
    Ok(())
}

fn check_required(value: &str, field: &str, position: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!(
            "Entry {position}: '{field}' must not be empty"
        )));
    }
    Ok(())
}

/// Validate self entries against the objective list.
///
/// Entries must be a 1:1 index-aligned projection over the set's objectives,
/// in the same order.
pub fn validate_self_entries(
    objectives: &[Objective],
    entries: &[SelfEntry],
) -> Result<(), CoreError> {
    if entries.len() != objectives.len() {
        return Err(CoreError::Validation(format!(
            "Expected {} self-evaluation entries (one per objective), got {}",
            objectives.len(),
            entries.len()
        )));
    }
    for (i, (objective, entry)) in objectives.iter().zip(entries).enumerate() {
        if entry.objective_id != objective.id {
            return Err(CoreError::Validation(format!(
                "Entry {i} references objective {}, expected objective {}",
                entry.objective_id, objective.id
            )));
        }
        check_score(entry.score, i)?;
        check_required(&entry.comment, "comment", i)?;
        check_required(&entry.achievements, "achievements", i)?;
        check_required(&entry.learnings, "learnings", i)?;
    }
    Ok(())
}

/// Validate referent entries against the previously submitted self entries.
///
/// The referent array must mirror the self array 1:1 in order and length; a
/// mismatched submission is rejected outright.
pub fn validate_referent_entries(
    self_entries: &[SelfEntry],
    entries: &[ReferentEntry],
) -> Result<(), CoreError> {
    if entries.len() != self_entries.len() {
        return Err(CoreError::Validation(format!(
            "Expected {} referent entries (one per self-evaluated objective), got {}",
            self_entries.len(),
            entries.len()
        )));
    }
    for (i, (self_entry, entry)) in self_entries.iter().zip(entries).enumerate() {
        if entry.objective_id != self_entry.objective_id {
            return Err(CoreError::Validation(format!(
                "Entry {i} references objective {}, expected objective {}",
                entry.objective_id, self_entry.objective_id
            )));
        }
        check_score(entry.score, i)?;
        check_required(&entry.comment, "comment", i)?;
        check_required(&entry.observed_achievements, "observedAchievements", i)?;
        check_required(&entry.overall_performance, "overallPerformance", i)?;
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   State machine gates
   -------------------------------------------------------------------------- */

/// Gate for entering or re-entering self-evaluation.
///
/// Allowed only when the project is finished, the objective set has been
/// submitted, and there is either no evaluation yet or one that the
/// referent has not evaluated.
pub fn ensure_self_submittable(
    project_status: ProjectStatus,
    set_status: ObjectiveSetStatus,
    existing: Option<EvaluationStatus>,
) -> Result<(), CoreError> {
    if project_status != ProjectStatus::Finished {
        return Err(CoreError::StaleState(format!(
            "Self-evaluation requires a finished project (project is {})",
            project_status.as_str()
        )));
    }
    if set_status != ObjectiveSetStatus::Submitted {
        return Err(CoreError::StaleState(
            "Self-evaluation requires a submitted objective set".to_string(),
        ));
    }
    match existing {
        None | Some(EvaluationStatus::DraftSelf) | Some(EvaluationStatus::SubmittedSelf) => Ok(()),
        Some(status) => Err(CoreError::StaleState(format!(
            "Self-evaluation can no longer be changed (evaluation is {})",
            status.as_str()
        ))),
    }
}

/// Gate for submitting or amending a referent evaluation.
///
/// Requires a submitted self-evaluation; an already evaluated record may be
/// amended.
pub fn ensure_referent_submittable(status: EvaluationStatus) -> Result<(), CoreError> {
    match status {
        EvaluationStatus::SubmittedSelf
        | EvaluationStatus::AwaitingReferent
        | EvaluationStatus::EvaluatedByReferent => Ok(()),
        other => Err(CoreError::StaleState(format!(
            "Referent evaluation requires a submitted self-evaluation (evaluation is {})",
            other.as_str()
        ))),
    }
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
