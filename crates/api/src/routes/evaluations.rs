//! Evaluation routes, split across `/objective-sets` and `/evaluations`.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::evaluations;
use crate::state::AppState;

/// Routes addressed by objective set id.
///
/// ```text
/// PUT /{objective_set_id}/self-evaluation    submit_self_evaluation
/// GET /{objective_set_id}/evaluation         get_evaluation_for_set
/// ```
pub fn objective_set_router() -> Router<AppState> {
    Router::new()
        .route(
            "/{objective_set_id}/self-evaluation",
            put(evaluations::submit_self_evaluation),
        )
        .route(
            "/{objective_set_id}/evaluation",
            get(evaluations::get_evaluation_for_set),
        )
}

/// Routes addressed by evaluation id.
///
/// ```text
/// GET /{evaluation_id}                       get_evaluation
/// PUT /{evaluation_id}/referent-evaluation   submit_referent_evaluation
/// ```
pub fn evaluation_router() -> Router<AppState> {
    Router::new()
        .route("/{evaluation_id}", get(evaluations::get_evaluation))
        .route(
            "/{evaluation_id}/referent-evaluation",
            put(evaluations::submit_referent_evaluation),
        )
}
