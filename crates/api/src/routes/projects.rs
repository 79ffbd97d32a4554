//! Project lifecycle routes.

use axum::routing::post;
use axum::Router;

use crate::handlers::projects;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/{project_id}/finish", post(projects::finish_project))
}
