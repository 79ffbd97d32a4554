pub mod coaching;
pub mod evaluations;
pub mod notifications;
pub mod objectives;
pub mod projects;
pub mod skills;
