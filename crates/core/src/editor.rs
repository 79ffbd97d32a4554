//! In-memory objective set editor.
//!
//! [`SetEditor`] holds the working copy of an objective list while it is
//! being edited, tracks which objective currently has editing focus, and
//! produces the validated, uniformly-stamped array that gets written back
//! as one atomic set replacement.

use crate::error::CoreError;
use crate::objective::{
    validate_for_draft, validate_for_submit, Objective, ObjectiveKind, ObjectiveSetStatus,
    SmartFields,
};
use crate::types::DbId;

/// Catalog skill fields the editor copies onto a new catalog-linked
/// objective.
#[derive(Debug, Clone)]
pub struct CatalogSkill {
    pub id: DbId,
    pub description: String,
    pub theme_name: String,
}

/// Working state for editing one objective set.
#[derive(Debug, Default)]
pub struct SetEditor {
    objectives: Vec<Objective>,
    focused: Option<DbId>,
}

impl SetEditor {
    /// Start editing from the currently stored objective list.
    pub fn new(objectives: Vec<Objective>) -> Self {
        Self {
            objectives,
            focused: None,
        }
    }

    pub fn objectives(&self) -> &[Objective] {
        &self.objectives
    }

    /// The objective currently focused for editing, if any.
    pub fn focused(&self) -> Option<DbId> {
        self.focused
    }

    /// Focus an objective for editing. No-op if the id is not in the set.
    pub fn focus(&mut self, objective_id: DbId) {
        if self.objectives.iter().any(|o| o.id == objective_id) {
            self.focused = Some(objective_id);
        }
    }

    /// Next free objective id within the set.
    fn next_id(&self) -> DbId {
        self.objectives.iter().map(|o| o.id).max().unwrap_or(0) + 1
    }

    /// Add a catalog-linked objective for the given skill.
    ///
    /// Fails with [`CoreError::DuplicateSkill`] when the skill is already
    /// referenced by the set. The new objective starts with empty SMART
    /// fields and receives editing focus.
    pub fn add_catalog_objective(&mut self, skill: &CatalogSkill) -> Result<DbId, CoreError> {
        if self
            .objectives
            .iter()
            .any(|o| o.kind.skill_id() == Some(skill.id))
        {
            return Err(CoreError::DuplicateSkill { skill_id: skill.id });
        }

        let id = self.next_id();
        self.objectives.push(Objective {
            id,
            skill_description: skill.description.clone(),
            theme_name: Some(skill.theme_name.clone()),
            kind: ObjectiveKind::CatalogLinked {
                skill_id: skill.id,
                smart: SmartFields::default(),
            },
        });
        self.focused = Some(id);
        Ok(id)
    }

    /// Add a non-catalog objective, assigning it the next free id.
    pub fn add_objective(&mut self, skill_description: String, kind: ObjectiveKind) -> DbId {
        let id = self.next_id();
        self.objectives.push(Objective {
            id,
            skill_description,
            theme_name: None,
            kind,
        });
        self.focused = Some(id);
        id
    }

    /// Remove an objective from the set. Always succeeds; removing the
    /// focused objective clears editing focus.
    pub fn remove_objective(&mut self, objective_id: DbId) {
        self.objectives.retain(|o| o.id != objective_id);
        if self.focused == Some(objective_id) {
            self.focused = None;
        }
    }

    /// Validate the working list and hand it back together with the status
    /// to stamp on the whole set.
    ///
    /// Draft saves only require one objective with a skill description;
    /// final saves require every objective to pass its completeness rule.
    pub fn into_objectives(
        self,
        as_draft: bool,
    ) -> Result<(Vec<Objective>, ObjectiveSetStatus), CoreError> {
        if as_draft {
            validate_for_draft(&self.objectives)?;
            Ok((self.objectives, ObjectiveSetStatus::Draft))
        } else {
            validate_for_submit(&self.objectives)?;
            Ok((self.objectives, ObjectiveSetStatus::Submitted))
        }
    }
}
