//! Talentflow event bus and notification infrastructure.
//!
//! - [`EventBus`] -- in-process publish/subscribe hub backed by
//!   `tokio::sync::broadcast`.
//! - [`DomainEvent`] -- the canonical domain event envelope.
//! - [`NotificationFanout`] -- background service that turns
//!   `project.finished` events into "self-evaluation due" notifications for
//!   every assignment employee of the project.

pub mod bus;
pub mod fanout;

pub use bus::{DomainEvent, EventBus, PROJECT_FINISHED};
pub use fanout::NotificationFanout;
