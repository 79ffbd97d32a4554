//! Talentflow domain core.
//!
//! Pure domain logic for the objective–evaluation lifecycle: the objective
//! model and its per-type completeness rules, the in-memory set editor, the
//! evaluation state machine with its validation gates, and the coaching
//! score aggregation math. No I/O lives here; the `talentflow-db` and
//! `talentflow-api` crates drive these functions.

pub mod coaching;
pub mod editor;
pub mod error;
pub mod evaluation;
pub mod objective;
pub mod project;
pub mod types;
