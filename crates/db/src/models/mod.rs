//! Row models and request DTOs.
//!
//! Row structs derive `FromRow` + `Serialize` and mirror their table
//! column-for-column; request DTOs derive `Deserialize` and carry only what
//! the caller may set.

pub mod assignment;
pub mod coaching;
pub mod evaluation;
pub mod notification;
pub mod objective_set;
pub mod project;
pub mod skill;
pub mod user;
