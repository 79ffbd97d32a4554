//! HTTP-level integration tests for the project-finished transition and
//! the notification endpoints.
//!
//! The test router does not run the background fan-out loop, so the
//! fan-out write path is invoked directly where notifications are needed.

mod common;

use axum::http::StatusCode;
use common::{
    assert_error, body_json, build_test_app, get, insert_assignment, insert_project, insert_user,
    post_empty, token_for,
};
use sqlx::PgPool;
use talentflow_events::NotificationFanout;

// ---------------------------------------------------------------------------
// Test: a coach finishes an active project
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_finish_project(pool: PgPool) {
    let coach = insert_user(&pool, "Cora Coach", "coach").await;
    let project = insert_project(&pool, "Atlas", "active").await;
    let app = build_test_app(pool);

    let response = post_empty(
        app,
        &token_for(coach, "coach"),
        &format!("/api/v1/projects/{project}/finish"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "finished");
}

// ---------------------------------------------------------------------------
// Test: employees may not finish projects
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_finish_project_forbidden_for_employee(pool: PgPool) {
    let employee = insert_user(&pool, "Ada", "employee").await;
    let project = insert_project(&pool, "Atlas", "active").await;
    let app = build_test_app(pool);

    let response = post_empty(
        app,
        &token_for(employee, "employee"),
        &format!("/api/v1/projects/{project}/finish"),
    )
    .await;
    assert_error(response, StatusCode::FORBIDDEN, "FORBIDDEN").await;
}

// ---------------------------------------------------------------------------
// Test: finishing twice conflicts
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_finish_project_twice_conflicts(pool: PgPool) {
    let coach = insert_user(&pool, "Cora Coach", "coach").await;
    let project = insert_project(&pool, "Atlas", "active").await;
    let token = token_for(coach, "coach");
    let uri = format!("/api/v1/projects/{project}/finish");

    let response = post_empty(build_test_app(pool.clone()), &token, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = post_empty(build_test_app(pool), &token, &uri).await;
    assert_error(response, StatusCode::CONFLICT, "STALE_STATE").await;
}

// ---------------------------------------------------------------------------
// Test: unknown project returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_finish_unknown_project_returns_404(pool: PgPool) {
    let coach = insert_user(&pool, "Cora Coach", "coach").await;
    let app = build_test_app(pool);

    let response = post_empty(app, &token_for(coach, "coach"), "/api/v1/projects/9999/finish").await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Test: fan-out notifications show up in the list and can be marked read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_notification_list_and_mark_read(pool: PgPool) {
    let employee = insert_user(&pool, "Ada", "employee").await;
    let referent = insert_user(&pool, "Rei", "employee").await;
    let project = insert_project(&pool, "Atlas", "finished").await;
    insert_assignment(&pool, project, employee, referent).await;

    let notified = NotificationFanout::notify_self_evaluation_due(&pool, project)
        .await
        .unwrap();
    assert_eq!(notified, 1);

    let token = token_for(employee, "employee");
    let response = get(build_test_app(pool.clone()), &token, "/api/v1/notifications").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let notifications = json["data"].as_array().unwrap();
    assert_eq!(notifications.len(), 1);
    assert_eq!(notifications[0]["kind"], "self_evaluation_due");
    assert_eq!(notifications[0]["is_read"], false);
    let notification_id = notifications[0]["id"].as_i64().unwrap();

    // The referent had no assignment as employee, so no notification.
    let response = get(
        build_test_app(pool.clone()),
        &token_for(referent, "employee"),
        "/api/v1/notifications",
    )
    .await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());

    // Mark read, then the unread filter excludes it.
    let response = post_empty(
        build_test_app(pool.clone()),
        &token,
        &format!("/api/v1/notifications/{notification_id}/read"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = get(
        build_test_app(pool),
        &token,
        "/api/v1/notifications?unread_only=true",
    )
    .await;
    assert!(body_json(response).await["data"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: marking a notification read twice succeeds and keeps read_at
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_mark_read_is_idempotent(pool: PgPool) {
    let employee = insert_user(&pool, "Ada", "employee").await;
    let referent = insert_user(&pool, "Rei", "employee").await;
    let project = insert_project(&pool, "Atlas", "finished").await;
    insert_assignment(&pool, project, employee, referent).await;

    NotificationFanout::notify_self_evaluation_due(&pool, project)
        .await
        .unwrap();
    let notification_id: i64 = sqlx::query_scalar("SELECT id FROM notifications LIMIT 1")
        .fetch_one(&pool)
        .await
        .unwrap();

    let token = token_for(employee, "employee");
    let uri = format!("/api/v1/notifications/{notification_id}/read");

    let response = post_empty(build_test_app(pool.clone()), &token, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let first_read_at: chrono::DateTime<chrono::Utc> =
        sqlx::query_scalar("SELECT read_at FROM notifications WHERE id = $1")
            .bind(notification_id)
            .fetch_one(&pool)
            .await
            .unwrap();

    let response = post_empty(build_test_app(pool.clone()), &token, &uri).await;
    assert_eq!(response.status(), StatusCode::OK);
    let second_read_at: chrono::DateTime<chrono::Utc> =
        sqlx::query_scalar("SELECT read_at FROM notifications WHERE id = $1")
            .bind(notification_id)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(second_read_at, first_read_at);
}

// ---------------------------------------------------------------------------
// Test: a user cannot mark someone else's notification read
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_mark_read_scoped_to_owner(pool: PgPool) {
    let employee = insert_user(&pool, "Ada", "employee").await;
    let other = insert_user(&pool, "Sam", "employee").await;
    let referent = insert_user(&pool, "Rei", "employee").await;
    let project = insert_project(&pool, "Atlas", "finished").await;
    insert_assignment(&pool, project, employee, referent).await;

    NotificationFanout::notify_self_evaluation_due(&pool, project)
        .await
        .unwrap();
    let notification_id: i64 = sqlx::query_scalar("SELECT id FROM notifications LIMIT 1")
        .fetch_one(&pool)
        .await
        .unwrap();

    let response = post_empty(
        build_test_app(pool),
        &token_for(other, "employee"),
        &format!("/api/v1/notifications/{notification_id}/read"),
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}
