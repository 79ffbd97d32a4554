//! Shared helpers for HTTP-level integration tests.
//!
//! Builds the application router via `build_app_router` so tests exercise
//! the exact middleware stack production uses, and provides request
//! helpers plus raw-SQL fixtures for the directory tables the lifecycle
//! reads but does not administer.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Method, Request, Response, StatusCode};
use axum::Router;
use http_body_util::BodyExt;
use sqlx::PgPool;
use tower::ServiceExt;

use talentflow_api::auth::jwt::{generate_access_token, JwtConfig};
use talentflow_api::config::ServerConfig;
use talentflow_api::router::build_app_router;
use talentflow_api::state::AppState;
use talentflow_core::types::DbId;
use talentflow_events::EventBus;

/// Build a test `ServerConfig` with safe defaults and a fixed JWT secret.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret".to_string(),
            access_token_expiry_mins: 15,
        },
    }
}

/// Build the full application router over the given database pool.
pub fn build_test_app(pool: PgPool) -> Router {
    let config = test_config();
    let state = AppState {
        pool,
        config: Arc::new(config.clone()),
        event_bus: Arc::new(EventBus::default()),
    };
    build_app_router(state, &config)
}

/// Mint a valid access token for the given user.
pub fn token_for(user_id: DbId, role: &str) -> String {
    generate_access_token(user_id, role, &test_config().jwt).expect("token generation failed")
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

async fn send(
    app: Router,
    method: Method,
    uri: &str,
    token: Option<&str>,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, token: &str, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, Some(token), None).await
}

pub async fn post_json(
    app: Router,
    token: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), Some(body)).await
}

pub async fn put_json(
    app: Router,
    token: &str,
    uri: &str,
    body: serde_json::Value,
) -> Response<Body> {
    send(app, Method::PUT, uri, Some(token), Some(body)).await
}

pub async fn post_empty(app: Router, token: &str, uri: &str) -> Response<Body> {
    send(app, Method::POST, uri, Some(token), None).await
}

pub async fn delete(app: Router, token: &str, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, Some(token), None).await
}

/// Unauthenticated request, for exercising the auth extractor itself.
pub async fn get_unauthenticated(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None, None).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap_or_else(|e| panic!("Response body is not JSON: {e}"))
}

/// Assert a `{ "error", "code" }` envelope with the given status and code.
pub async fn assert_error(response: Response<Body>, status: StatusCode, code: &str) {
    assert_eq!(response.status(), status);
    let json = body_json(response).await;
    assert_eq!(json["code"], code, "unexpected error code: {json}");
    assert!(json["error"].is_string(), "missing error message: {json}");
}

// ---------------------------------------------------------------------------
// Directory fixtures (raw SQL; user/project administration is out of scope)
// ---------------------------------------------------------------------------

pub async fn insert_user(pool: &PgPool, name: &str, role: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO users (display_name, role) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(role)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_coachee(pool: &PgPool, name: &str, coach_id: DbId) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO users (display_name, role, coach_id) VALUES ($1, 'employee', $2) RETURNING id",
    )
    .bind(name)
    .bind(coach_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

pub async fn insert_project(pool: &PgPool, name: &str, status: &str) -> DbId {
    sqlx::query_scalar("INSERT INTO projects (name, status) VALUES ($1, $2) RETURNING id")
        .bind(name)
        .bind(status)
        .fetch_one(pool)
        .await
        .unwrap()
}

pub async fn insert_assignment(
    pool: &PgPool,
    project_id: DbId,
    employee_id: DbId,
    referent_id: DbId,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO assignments (project_id, employee_id, referent_id)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(project_id)
    .bind(employee_id)
    .bind(referent_id)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Seed an objective set directly, bypassing the editor endpoints.
pub async fn insert_objective_set(
    pool: &PgPool,
    assignment_id: DbId,
    status: &str,
    objectives: serde_json::Value,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO objective_sets (assignment_id, status, objectives)
         VALUES ($1, $2, $3) RETURNING id",
    )
    .bind(assignment_id)
    .bind(status)
    .bind(objectives)
    .fetch_one(pool)
    .await
    .unwrap()
}

/// Seed an evaluation directly in an arbitrary lifecycle state.
pub async fn insert_evaluation(
    pool: &PgPool,
    objective_set_id: DbId,
    status: &str,
    self_entries: serde_json::Value,
    referent_entries: serde_json::Value,
) -> DbId {
    sqlx::query_scalar(
        "INSERT INTO evaluations
             (objective_set_id, status, self_entries, self_submitted_at,
              referent_entries, referent_submitted_at)
         VALUES ($1, $2, $3, NOW(),
                 $4, CASE WHEN $2 IN ('evaluatedByReferent', 'finalized', 'rejected')
                          THEN NOW() END)
         RETURNING id",
    )
    .bind(objective_set_id)
    .bind(status)
    .bind(self_entries)
    .bind(referent_entries)
    .fetch_one(pool)
    .await
    .unwrap()
}

// ---------------------------------------------------------------------------
// JSON payload builders
// ---------------------------------------------------------------------------

/// A complete freeform objective as JSON.
pub fn freeform_objective(id: DbId, skill: &str, statement: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "skillDescription": skill,
        "themeName": null,
        "type": "freeform",
        "statement": statement,
    })
}

/// A complete SMART custom objective as JSON.
pub fn smart_objective(id: DbId, skill: &str) -> serde_json::Value {
    serde_json::json!({
        "id": id,
        "skillDescription": skill,
        "themeName": "Craft",
        "type": "smartCustom",
        "smartStatement": "Ship the feature",
        "specific": "Own it end to end",
        "measurable": "Zero regressions",
        "achievable": "Scoped with the lead",
        "relevant": "Main team deliverable",
        "timeBound": "By project end",
    })
}

/// A valid self-evaluation entry as JSON.
pub fn self_entry(objective_id: DbId, score: i16) -> serde_json::Value {
    serde_json::json!({
        "objectiveId": objective_id,
        "score": score,
        "comment": "Went well overall",
        "achievements": "Delivered the planned work",
        "difficulties": null,
        "learnings": "Better estimation next time",
        "nextSteps": null,
    })
}

/// A valid referent entry as JSON.
pub fn referent_entry(objective_id: DbId, score: i16) -> serde_json::Value {
    serde_json::json!({
        "objectiveId": objective_id,
        "score": score,
        "comment": "Solid contribution",
        "observedAchievements": "Consistent delivery through the project",
        "areasForImprovement": null,
        "developmentRecommendations": null,
        "overallPerformance": "Meets expectations",
    })
}
