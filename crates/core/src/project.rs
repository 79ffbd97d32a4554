//! Project status values as seen by the evaluation lifecycle.
//!
//! Projects are administered elsewhere; the core only reads the status to
//! gate objective editing (not on cancelled projects) and self-evaluation
//! (only on finished projects).

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    Active,
    Finished,
    Cancelled,
}

impl ProjectStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectStatus::Active => "active",
            ProjectStatus::Finished => "finished",
            ProjectStatus::Cancelled => "cancelled",
        }
    }

    /// Parse a status string as stored in the `projects.status` column.
    pub fn parse(s: &str) -> Result<Self, CoreError> {
        match s {
            "active" => Ok(ProjectStatus::Active),
            "finished" => Ok(ProjectStatus::Finished),
            "cancelled" => Ok(ProjectStatus::Cancelled),
            other => Err(CoreError::Internal(format!(
                "Unknown project status '{other}'"
            ))),
        }
    }
}
