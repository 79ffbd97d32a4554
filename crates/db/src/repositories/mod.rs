//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod assignment_repo;
pub mod coaching_repo;
pub mod evaluation_repo;
pub mod notification_repo;
pub mod objective_set_repo;
pub mod project_repo;
pub mod skill_repo;
pub mod user_repo;

pub use assignment_repo::AssignmentRepo;
pub use coaching_repo::CoachingRepo;
pub use evaluation_repo::EvaluationRepo;
pub use notification_repo::NotificationRepo;
pub use objective_set_repo::ObjectiveSetRepo;
pub use project_repo::ProjectRepo;
pub use skill_repo::SkillRepo;
pub use user_repo::UserRepo;
