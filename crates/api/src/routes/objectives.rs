//! Route definitions for objective set editing, merged into `/assignments`.
//!
//! ```text
//! PUT    /{assignment_id}/objectives                       save_objectives
//! GET    /{assignment_id}/objectives                       get_objectives
//! POST   /{assignment_id}/objectives/catalog               add_catalog_objective
//! DELETE /{assignment_id}/objectives/{objective_id}        remove_objective
//! ```

use axum::routing::{delete, post, put};
use axum::Router;

use crate::handlers::objectives;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new()
        .route(
            "/{assignment_id}/objectives",
            put(objectives::save_objectives).get(objectives::get_objectives),
        )
        .route(
            "/{assignment_id}/objectives/catalog",
            post(objectives::add_catalog_objective),
        )
        .route(
            "/{assignment_id}/objectives/{objective_id}",
            delete(objectives::remove_objective),
        )
}
