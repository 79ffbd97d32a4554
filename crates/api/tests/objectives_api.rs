//! HTTP-level integration tests for objective set editing.
//!
//! Uses Axum's tower::ServiceExt to send requests directly to the router.
//! Directory rows (users, projects, assignments) are seeded with raw SQL;
//! everything else goes through the API.

mod common;

use axum::http::StatusCode;
use common::{
    assert_error, body_json, build_test_app, delete, freeform_objective, get, insert_assignment,
    insert_coachee, insert_project, insert_user, post_json, put_json, smart_objective, token_for,
};
use serde_json::json;
use sqlx::PgPool;
use talentflow_core::types::DbId;

/// Seed one employee/referent pair assigned to an active project.
/// Returns (assignment_id, employee_id, referent_id).
async fn seed_assignment(pool: &PgPool) -> (DbId, DbId, DbId) {
    let employee = insert_user(pool, "Ada Employee", "employee").await;
    let referent = insert_user(pool, "Rei Referent", "employee").await;
    let project = insert_project(pool, "Atlas", "active").await;
    let assignment = insert_assignment(pool, project, employee, referent).await;
    (assignment, employee, referent)
}

// ---------------------------------------------------------------------------
// Test: PUT saves a draft with incomplete objectives
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_draft_allows_incomplete_objectives(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let app = build_test_app(pool);
    let token = token_for(employee, "employee");

    // Two catalog-linked objectives with untouched SMART fields plus a
    // freeform with no statement yet; a draft only needs the descriptions.
    let empty_catalog = |id: i64, skill_id: i64, skill: &str| {
        json!({
            "id": id,
            "skillDescription": skill,
            "themeName": "Craft",
            "type": "catalogLinked",
            "skillId": skill_id,
            "smartStatement": "", "specific": "", "measurable": "",
            "achievable": "", "relevant": "", "timeBound": "",
        })
    };
    let body = json!({
        "objectives": [
            empty_catalog(1, 1, "Backend architecture"),
            empty_catalog(2, 2, "Code review quality"),
            freeform_objective(3, "Public speaking", ""),
        ],
        "asDraft": true,
    });

    let response = put_json(
        app,
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "draft");
    assert_eq!(json["data"]["objectives"].as_array().unwrap().len(), 3);
    assert_eq!(json["data"]["objectives"][2]["type"], "freeform");
}

// ---------------------------------------------------------------------------
// Test: submitting with an incomplete objective fails and names it
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_rejects_incomplete_objective(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let app = build_test_app(pool.clone());
    let token = token_for(employee, "employee");

    let body = json!({
        "objectives": [
            smart_objective(1, "Backend architecture"),
            freeform_objective(2, "Public speaking", ""),
        ],
        "asDraft": false,
    });

    let response = put_json(
        app,
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = body_json(response).await;
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert!(
        json["error"]
            .as_str()
            .unwrap()
            .contains("objective 'Public speaking' is incomplete"),
        "error should name the failing objective: {json}"
    );

    // Nothing was persisted.
    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM objective_sets")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

// ---------------------------------------------------------------------------
// Test: submitting a complete set stamps it submitted
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_submit_complete_set(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let app = build_test_app(pool);
    let token = token_for(employee, "employee");

    let body = json!({
        "objectives": [
            smart_objective(1, "Backend architecture"),
            freeform_objective(2, "Public speaking", "Give two team talks"),
        ],
        "asDraft": false,
    });

    let response = put_json(
        app,
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives"),
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "submitted");
}

// ---------------------------------------------------------------------------
// Test: resaving replaces the whole objective list
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_resave_replaces_objectives(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let token = token_for(employee, "employee");
    let uri = format!("/api/v1/assignments/{assignment}/objectives");

    let first = json!({
        "objectives": [smart_objective(1, "Backend architecture")],
        "asDraft": true,
    });
    let response = put_json(build_test_app(pool.clone()), &token, &uri, first).await;
    assert_eq!(response.status(), StatusCode::OK);

    let second = json!({
        "objectives": [
            freeform_objective(1, "Incident handling", "Run one postmortem"),
            freeform_objective(2, "Estimation", "Estimate the next milestone"),
        ],
        "asDraft": true,
    });
    let response = put_json(build_test_app(pool), &token, &uri, second).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let objectives = json["data"]["objectives"].as_array().unwrap();
    assert_eq!(objectives.len(), 2);
    assert_eq!(objectives[0]["skillDescription"], "Incident handling");
}

// ---------------------------------------------------------------------------
// Test: only the assignment's employee may edit
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_forbidden_for_non_owner(pool: PgPool) {
    let (assignment, _, referent) = seed_assignment(&pool).await;
    let app = build_test_app(pool);
    let token = token_for(referent, "employee");

    let body = json!({
        "objectives": [smart_objective(1, "Backend architecture")],
        "asDraft": true,
    });

    let response = put_json(
        app,
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives"),
        body,
    )
    .await;
    assert_error(response, StatusCode::FORBIDDEN, "FORBIDDEN").await;
}

// ---------------------------------------------------------------------------
// Test: unknown assignment id returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_unknown_assignment_returns_404(pool: PgPool) {
    let employee = insert_user(&pool, "Ada", "employee").await;
    let app = build_test_app(pool);
    let token = token_for(employee, "employee");

    let body = json!({
        "objectives": [smart_objective(1, "Backend architecture")],
        "asDraft": true,
    });

    let response = put_json(app, &token, "/api/v1/assignments/9999/objectives", body).await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Test: duplicate catalog skill in one payload returns 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_duplicate_catalog_skill_conflicts(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let app = build_test_app(pool);
    let token = token_for(employee, "employee");

    let catalog = |id: DbId| {
        json!({
            "id": id,
            "skillDescription": "Backend architecture",
            "themeName": "Craft",
            "type": "catalogLinked",
            "skillId": 1,
            "smartStatement": "", "specific": "", "measurable": "",
            "achievable": "", "relevant": "", "timeBound": "",
        })
    };
    let body = json!({
        "objectives": [catalog(1), catalog(2)],
        "asDraft": true,
    });

    let response = put_json(
        app,
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives"),
        body,
    )
    .await;
    assert_error(response, StatusCode::CONFLICT, "DUPLICATE_SKILL").await;
}

// ---------------------------------------------------------------------------
// Test: POST catalog add creates the set and starts a draft objective
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_catalog_objective_creates_set(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let token = token_for(employee, "employee");
    let uri = format!("/api/v1/assignments/{assignment}/objectives/catalog");

    let response = post_json(build_test_app(pool), &token, &uri, json!({ "skillId": 1 })).await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "draft");
    let objectives = json["data"]["objectives"].as_array().unwrap();
    assert_eq!(objectives.len(), 1);
    assert_eq!(objectives[0]["type"], "catalogLinked");
    assert_eq!(objectives[0]["skillId"], 1);
    // Description and theme copied from the catalog row.
    assert_eq!(objectives[0]["skillDescription"], "Backend architecture");
    assert_eq!(objectives[0]["themeName"], "Craft");
    // SMART fields start empty.
    assert_eq!(objectives[0]["smartStatement"], "");
}

// ---------------------------------------------------------------------------
// Test: adding the same catalog skill twice returns 409
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_catalog_objective_twice_conflicts(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let token = token_for(employee, "employee");
    let uri = format!("/api/v1/assignments/{assignment}/objectives/catalog");

    let response = post_json(
        build_test_app(pool.clone()),
        &token,
        &uri,
        json!({ "skillId": 2 }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let response = post_json(build_test_app(pool), &token, &uri, json!({ "skillId": 2 })).await;
    assert_error(response, StatusCode::CONFLICT, "DUPLICATE_SKILL").await;
}

// ---------------------------------------------------------------------------
// Test: adding an unknown skill returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_add_unknown_skill_returns_404(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let app = build_test_app(pool);
    let token = token_for(employee, "employee");

    let response = post_json(
        app,
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives/catalog"),
        json!({ "skillId": 9999 }),
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Test: DELETE removes one objective and reverts the set to draft
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_objective_reverts_to_draft(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let token = token_for(employee, "employee");
    let uri = format!("/api/v1/assignments/{assignment}/objectives");

    let body = json!({
        "objectives": [
            smart_objective(1, "Backend architecture"),
            freeform_objective(2, "Public speaking", "Give two team talks"),
        ],
        "asDraft": false,
    });
    let response = put_json(build_test_app(pool.clone()), &token, &uri, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(
        build_test_app(pool.clone()),
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives/1"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "draft");
    let objectives = json["data"]["objectives"].as_array().unwrap();
    assert_eq!(objectives.len(), 1);
    assert_eq!(objectives[0]["id"], 2);

    // Removing the last objective still succeeds; an empty set is a draft.
    let response = delete(
        build_test_app(pool),
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives/2"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let json = body_json(response).await;
    assert!(json["data"]["objectives"].as_array().unwrap().is_empty());
}

// ---------------------------------------------------------------------------
// Test: DELETE of an absent objective id leaves a submitted set untouched
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_remove_absent_objective_keeps_submitted_status(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let token = token_for(employee, "employee");
    let uri = format!("/api/v1/assignments/{assignment}/objectives");

    let body = json!({
        "objectives": [
            smart_objective(1, "Backend architecture"),
            freeform_objective(2, "Public speaking", "Give two team talks"),
        ],
        "asDraft": false,
    });
    let response = put_json(build_test_app(pool.clone()), &token, &uri, body).await;
    assert_eq!(response.status(), StatusCode::OK);

    let response = delete(
        build_test_app(pool.clone()),
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives/42"),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["data"]["status"], "submitted");
    assert_eq!(json["data"]["objectives"].as_array().unwrap().len(), 2);

    // The stored row kept its status as well.
    let status: String =
        sqlx::query_scalar("SELECT status FROM objective_sets WHERE assignment_id = $1")
            .bind(assignment)
            .fetch_one(&pool)
            .await
            .unwrap();
    assert_eq!(status, "submitted");
}

// ---------------------------------------------------------------------------
// Test: editing on a cancelled project is rejected
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_save_on_cancelled_project_conflicts(pool: PgPool) {
    let employee = insert_user(&pool, "Ada", "employee").await;
    let referent = insert_user(&pool, "Rei", "employee").await;
    let project = insert_project(&pool, "Sunset", "cancelled").await;
    let assignment = insert_assignment(&pool, project, employee, referent).await;
    let app = build_test_app(pool);
    let token = token_for(employee, "employee");

    let body = json!({
        "objectives": [smart_objective(1, "Backend architecture")],
        "asDraft": true,
    });

    let response = put_json(
        app,
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives"),
        body,
    )
    .await;
    assert_error(response, StatusCode::CONFLICT, "STALE_STATE").await;
}

// ---------------------------------------------------------------------------
// Test: read access for employee, referent, and coach; strangers get 403
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_read_access_levels(pool: PgPool) {
    let coach = insert_user(&pool, "Cora Coach", "coach").await;
    let employee = insert_coachee(&pool, "Ada", coach).await;
    let referent = insert_user(&pool, "Rei", "employee").await;
    let stranger = insert_user(&pool, "Sam", "employee").await;
    let project = insert_project(&pool, "Atlas", "active").await;
    let assignment = insert_assignment(&pool, project, employee, referent).await;

    let uri = format!("/api/v1/assignments/{assignment}/objectives");

    let body = json!({
        "objectives": [smart_objective(1, "Backend architecture")],
        "asDraft": true,
    });
    let response = put_json(
        build_test_app(pool.clone()),
        &token_for(employee, "employee"),
        &uri,
        body,
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    for (user, role) in [(employee, "employee"), (referent, "employee"), (coach, "coach")] {
        let response = get(build_test_app(pool.clone()), &token_for(user, role), &uri).await;
        assert_eq!(response.status(), StatusCode::OK, "user {user} should read");
    }

    let response = get(
        build_test_app(pool),
        &token_for(stranger, "employee"),
        &uri,
    )
    .await;
    assert_error(response, StatusCode::FORBIDDEN, "FORBIDDEN").await;
}

// ---------------------------------------------------------------------------
// Test: GET before any save returns 404
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_get_objectives_before_save_returns_404(pool: PgPool) {
    let (assignment, employee, _) = seed_assignment(&pool).await;
    let app = build_test_app(pool);
    let token = token_for(employee, "employee");

    let response = get(
        app,
        &token,
        &format!("/api/v1/assignments/{assignment}/objectives"),
    )
    .await;
    assert_error(response, StatusCode::NOT_FOUND, "NOT_FOUND").await;
}

// ---------------------------------------------------------------------------
// Test: skill catalog is readable by any authenticated user
// ---------------------------------------------------------------------------

#[sqlx::test(migrations = "../db/migrations")]
async fn test_list_skills(pool: PgPool) {
    let employee = insert_user(&pool, "Ada", "employee").await;
    let app = build_test_app(pool);
    let token = token_for(employee, "employee");

    let response = get(app, &token, "/api/v1/skills").await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    let skills = json["data"].as_array().unwrap();
    assert_eq!(skills.len(), 8);
    assert!(skills.iter().any(|s| s["description"] == "Backend architecture"));
}
