//! Notification fan-out service.
//!
//! [`NotificationFanout`] subscribes to the [`EventBus`](crate::bus::EventBus)
//! and, on each `project.finished` event, writes one "self-evaluation due"
//! notification per assignment employee of that project. Fire-and-forget:
//! failures are logged, never reported back to whoever finished the
//! project.

use tokio::sync::broadcast;

use talentflow_core::types::DbId;
use talentflow_db::repositories::{AssignmentRepo, NotificationRepo};
use talentflow_db::DbPool;

use crate::bus::{DomainEvent, PROJECT_FINISHED};

/// Notification kind written for each affected employee.
pub const KIND_SELF_EVALUATION_DUE: &str = "self_evaluation_due";

/// Background service that routes project-finished events to employee
/// notifications.
pub struct NotificationFanout {
    pool: DbPool,
}

impl NotificationFanout {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    /// Run the fan-out loop.
    ///
    /// Subscribes to the event bus via the provided `receiver`. The loop
    /// exits when the channel is closed (i.e. the bus is dropped).
    pub async fn run(self, mut receiver: broadcast::Receiver<DomainEvent>) {
        loop {
            match receiver.recv().await {
                Ok(event) => {
                    if event.event_type != PROJECT_FINISHED {
                        continue;
                    }
                    let Some(project_id) = event.source_entity_id else {
                        tracing::warn!("project.finished event without a project id");
                        continue;
                    };
                    match Self::notify_self_evaluation_due(&self.pool, project_id).await {
                        Ok(count) => {
                            tracing::info!(
                                project_id,
                                notified = count,
                                "Self-evaluation-due notifications written"
                            );
                        }
                        Err(e) => {
                            tracing::error!(
                                error = %e,
                                project_id,
                                "Failed to fan out project.finished notifications"
                            );
                        }
                    }
                }
                Err(broadcast::error::RecvError::Lagged(n)) => {
                    tracing::warn!(skipped = n, "Notification fan-out lagged, events skipped");
                }
                Err(broadcast::error::RecvError::Closed) => {
                    tracing::info!("Event bus closed, notification fan-out shutting down");
                    break;
                }
            }
        }
    }

    /// Write one "self-evaluation due" notification per assignment employee
    /// of the project. Returns the number of notifications written.
    pub async fn notify_self_evaluation_due(
        pool: &DbPool,
        project_id: DbId,
    ) -> Result<usize, sqlx::Error> {
        let employee_ids = AssignmentRepo::employee_ids_for_project(pool, project_id).await?;
        for &employee_id in &employee_ids {
            NotificationRepo::create(
                pool,
                employee_id,
                KIND_SELF_EVALUATION_DUE,
                "Your project has finished: the self-evaluation of your objectives is due.",
            )
            .await?;
        }
        Ok(employee_ids.len())
    }
}
