pub mod coaching;
pub mod evaluations;
pub mod health;
pub mod notifications;
pub mod objectives;
pub mod projects;
pub mod skills;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /assignments/{assignment_id}/objectives                  save, get objective set
/// /assignments/{assignment_id}/objectives/catalog          add catalog objective
/// /assignments/{assignment_id}/objectives/{objective_id}   remove objective
///
/// /objective-sets/{id}/self-evaluation                     submit self evaluation (PUT)
/// /objective-sets/{id}/evaluation                          get evaluation for set
///
/// /evaluations/{id}                                        get evaluation
/// /evaluations/{id}/referent-evaluation                    submit referent evaluation (PUT)
///
/// /coaching/rows                                           coaching view rows
/// /coaching/rollup                                         per-coachee averages
///
/// /projects/{id}/finish                                    finish project (POST)
///
/// /notifications                                           list (?unread_only)
/// /notifications/{id}/read                                 mark read (POST)
///
/// /skills                                                  skill catalog
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        // Objective set editing, addressed by assignment.
        .nest("/assignments", objectives::router())
        // Evaluation lifecycle.
        .nest("/objective-sets", evaluations::objective_set_router())
        .nest("/evaluations", evaluations::evaluation_router())
        // Coaching aggregation.
        .nest("/coaching", coaching::router())
        // Project lifecycle.
        .nest("/projects", projects::router())
        // Notifications.
        .nest("/notifications", notifications::router())
        // Skill catalog.
        .nest("/skills", skills::router())
}
