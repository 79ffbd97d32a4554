//! Notification routes.
//!
//! ```text
//! GET  /                  list (?unread_only)
//! POST /{id}/read         mark read
//! ```

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::notifications;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notifications::list_notifications))
        .route("/{notification_id}/read", post(notifications::mark_read))
}
