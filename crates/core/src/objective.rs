//! Objective model and per-type completeness rules.
//!
//! An objective set carries a list of [`Objective`]s attached to one project
//! assignment. Objectives come in four shapes, modeled as a tagged union so
//! each variant only carries the fields its completeness rule looks at.
//! Draft/submitted status is a property of the whole set, stamped uniformly
//! on save, never tracked per objective.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::types::DbId;

/* --------------------------------------------------------------------------
   Set status
   -------------------------------------------------------------------------- */

/// Set-level status stamped on every save.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ObjectiveSetStatus {
    Draft,
    Submitted,
}

impl ObjectiveSetStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ObjectiveSetStatus::Draft => "draft",
            ObjectiveSetStatus::Submitted => "submitted",
        }
    }

    /// Parse a status string as stored in the `objective_sets.status` column.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "draft" => Ok(ObjectiveSetStatus::Draft),
            "submitted" => Ok(ObjectiveSetStatus::Submitted),
            other => Err(CoreError::Internal(format!(
                "Unknown objective set status '{other}'"
            ))),
        }
    }
}

/* --------------------------------------------------------------------------
   Objective shapes
   -------------------------------------------------------------------------- */

/// The SMART sub-fields shared by catalog-linked and custom SMART objectives.
///
/// All six fields are required non-empty (after trimming) for the objective
/// to count as complete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SmartFields {
    pub smart_statement: String,
    pub specific: String,
    pub measurable: String,
    pub achievable: String,
    pub relevant: String,
    pub time_bound: String,
}

impl SmartFields {
    fn is_complete(&self) -> bool {
        !self.smart_statement.trim().is_empty()
            && !self.specific.trim().is_empty()
            && !self.measurable.trim().is_empty()
            && !self.achievable.trim().is_empty()
            && !self.relevant.trim().is_empty()
            && !self.time_bound.trim().is_empty()
    }
}

/// Type-conditional part of an objective.
///
/// Serialized into the objective set's JSONB array with an explicit `type`
/// tag, so the stored shape matches the API wire shape one-to-one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum ObjectiveKind {
    /// Linked to a skill catalog entry; SMART-shaped.
    CatalogLinked {
        skill_id: DbId,
        #[serde(flatten)]
        smart: SmartFields,
    },
    /// Employee-defined SMART objective.
    SmartCustom {
        #[serde(flatten)]
        smart: SmartFields,
    },
    /// Training objective with a single free-text statement.
    Formation { statement: String },
    /// Free-form objective with a single free-text statement.
    Freeform { statement: String },
}

impl ObjectiveKind {
    /// The catalog skill this objective references, if any.
    pub fn skill_id(&self) -> Option<DbId> {
        match self {
            ObjectiveKind::CatalogLinked { skill_id, .. } => Some(*skill_id),
            _ => None,
        }
    }
}

/// One development goal inside an objective set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Objective {
    /// Unique within the owning set.
    pub id: DbId,
    /// Short description of the skill being developed. Required non-empty
    /// even for drafts.
    pub skill_description: String,
    /// Display grouping label (e.g. "Communication", "Craft").
    pub theme_name: Option<String>,
    #[serde(flatten)]
    pub kind: ObjectiveKind,
}

impl Objective {
    /// Completeness predicate used both for UI affordance and submit gating.
    ///
    /// SMART-shaped objectives require the skill description plus all six
    /// SMART fields; formation/freeform objectives require the skill
    /// description plus the statement.
    pub fn is_complete(&self) -> bool {
        if self.skill_description.trim().is_empty() {
            return false;
        }
        match &self.kind {
            ObjectiveKind::CatalogLinked { smart, .. } => smart.is_complete(),
            ObjectiveKind::SmartCustom { smart } => smart.is_complete(),
            ObjectiveKind::Formation { statement } | ObjectiveKind::Freeform { statement } => {
                !statement.trim().is_empty()
            }
        }
    }
}

/* --------------------------------------------------------------------------
   Set-level validation
   -------------------------------------------------------------------------- */

/// Validate a full objective list for a draft save.
///
/// A draft only needs at least one objective with a non-empty skill
/// description; incomplete type-specific fields are allowed.
pub fn validate_for_draft(objectives: &[Objective]) -> Result<(), CoreError> {
    if objectives.is_empty() {
        return Err(CoreError::Validation(
            "An objective set must contain at least one objective".to_string(),
        ));
    }
    if !objectives
        .iter()
        .any(|o| !o.skill_description.trim().is_empty())
    {
        return Err(CoreError::Validation(
            "At least one objective must have a skill description".to_string(),
        ));
    }
    check_duplicate_skills(objectives)?;
    check_duplicate_ids(objectives)
}

/// Validate a full objective list for a final (submitted) save.
///
/// Every objective must satisfy its type-conditional completeness rule; the
/// error names the first failing objective.
pub fn validate_for_submit(objectives: &[Objective]) -> Result<(), CoreError> {
    if objectives.is_empty() {
        return Err(CoreError::Validation(
            "An objective set must contain at least one objective".to_string(),
        ));
    }
    for objective in objectives {
        if !objective.is_complete() {
            let label = if objective.skill_description.trim().is_empty() {
                format!("objective {}", objective.id)
            } else {
                format!("objective '{}'", objective.skill_description.trim())
            };
            return Err(CoreError::Validation(format!(
                "Cannot submit: {label} is incomplete"
            )));
        }
    }
    check_duplicate_skills(objectives)?;
    check_duplicate_ids(objectives)
}

/// A catalog skill may be referenced at most once per set.
fn check_duplicate_skills(objectives: &[Objective]) -> Result<(), CoreError> {
    let mut seen = Vec::new();
    for objective in objectives {
        if let Some(skill_id) = objective.kind.skill_id() {
            if seen.contains(&skill_id) {
                return Err(CoreError::DuplicateSkill { skill_id });
            }
            seen.push(skill_id);
        }
    }
    Ok(())
}

/// Objective ids must be unique within the set; evaluation entries are keyed
/// on them.
fn check_duplicate_ids(objectives: &[Objective]) -> Result<(), CoreError> {
    let mut seen = Vec::new();
    for objective in objectives {
        if seen.contains(&objective.id) {
            return Err(CoreError::Validation(format!(
                "Duplicate objective id {} in set",
                objective.id
            )));
        }
        seen.push(objective.id);
    }
    Ok(())
}

/* --------------------------------------------------------------------------
   Tests
   -------------------------------------------------------------------------- */
