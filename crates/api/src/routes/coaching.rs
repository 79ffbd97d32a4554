//! Coaching dashboard routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::coaching;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/rows", get(coaching::list_rows))
        .route("/rollup", get(coaching::get_rollup))
}
