//! Skill catalog routes.

use axum::routing::get;
use axum::Router;

use crate::handlers::skills;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(skills::list_skills))
}
