//! Integration tests for suggestion triage and admin account management.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

/// Root token, a Logistics-scoped admin token, and the two department IDs.
async fn scoped_setup(app: &TestApp) -> (String, String, i64, i64) {
    let root = app.root_token().await;
    let logistics = app.department_id("Logistics").await;
    let academic = app.department_id("Academic Affairs").await;
    app.create_admin(
        &root,
        "logi",
        "logipass",
        "department_admin",
        Some(logistics),
        false,
    )
    .await;
    let logi = app.login("logi", "logipass").await;
    (root, logi, logistics, academic)
}

#[tokio::test]
async fn test_scoped_admin_sees_only_own_department() {
    let app = TestApp::new().await;
    let (root, logi, logistics, academic) = scoped_setup(&app).await;

    app.submit("Broken lockers", Some(logistics), false).await;
    let other = app.submit("Exam timetable", Some(academic), false).await;
    app.submit("General idea", None, false).await;

    let response = app
        .request("GET", "/api/v1/admin/suggestions", None, Some(&logi))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 2);
    for item in response.body["data"].as_array().unwrap() {
        assert_ne!(item["department_id"], academic);
    }

    // A department filter cannot widen the scope.
    let response = app
        .request(
            "GET",
            &format!("/api/v1/admin/suggestions?department_id={academic}"),
            None,
            Some(&logi),
        )
        .await;
    assert_eq!(response.body["total"], 2);

    let other_id = app.suggestion_id(&other).await;
    let response = app
        .request(
            "GET",
            &format!("/api/v1/admin/suggestions/{other_id}"),
            None,
            Some(&logi),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/admin/suggestions/{other_id}/status"),
            Some(json!({ "status": "resolved" })),
            Some(&logi),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", "/api/v1/admin/suggestions", None, Some(&root))
        .await;
    assert_eq!(response.body["total"], 3);

    let response = app
        .request(
            "GET",
            &format!("/api/v1/admin/suggestions?department_id={academic}"),
            None,
            Some(&root),
        )
        .await;
    assert_eq!(response.body["total"], 1);
}

#[tokio::test]
async fn test_status_filter_and_validation() {
    let app = TestApp::new().await;
    let root = app.root_token().await;

    let code = app.submit("Canteen menu", None, false).await;
    app.submit("Sports day", None, false).await;
    let id = app.suggestion_id(&code).await;

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/admin/suggestions/{id}/status"),
            Some(json!({ "status": "resolved" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "resolved");

    // Any state may move to any other.
    let response = app
        .request(
            "PUT",
            &format!("/api/v1/admin/suggestions/{id}/status"),
            Some(json!({ "status": "pending-review" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/admin/suggestions/{id}/status"),
            Some(json!({ "status": "archived" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            "/api/v1/admin/suggestions/99999/status",
            Some(json!({ "status": "closed" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "GET",
            "/api/v1/admin/suggestions?status=pending-review",
            None,
            Some(&root),
        )
        .await;
    assert_eq!(response.body["total"], 2);

    let response = app
        .request(
            "GET",
            "/api/v1/admin/suggestions?status=bogus",
            None,
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_replies_visible_to_submitter() {
    let app = TestApp::new().await;
    let (_root, logi, logistics, _) = scoped_setup(&app).await;

    let code = app.submit("More bins", Some(logistics), false).await;
    let id = app.suggestion_id(&code).await;

    let response = app
        .request(
            "POST",
            &format!("/api/v1/admin/suggestions/{id}/replies"),
            Some(json!({ "content": "Ordered ten more." })),
            Some(&logi),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["admin"]["username"], "logi");

    let response = app
        .request(
            "POST",
            &format!("/api/v1/admin/suggestions/{id}/replies"),
            Some(json!({ "content": "" })),
            Some(&logi),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", &format!("/api/v1/suggestions/{code}"), None, None)
        .await;
    let replies = response.body["replies"].as_array().unwrap();
    assert_eq!(replies.len(), 1);
    assert_eq!(replies[0]["content"], "Ordered ten more.");
    assert_eq!(replies[0]["admin"]["role"], "department_admin");
}

#[tokio::test]
async fn test_bulk_delete_removes_suggestions_and_replies() {
    let app = TestApp::new().await;
    let root = app.root_token().await;

    let first = app.submit("First", None, false).await;
    let second = app.submit("Second", None, false).await;
    let keep = app.submit("Keep", None, false).await;
    let first_id = app.suggestion_id(&first).await;
    let second_id = app.suggestion_id(&second).await;

    app.request(
        "POST",
        &format!("/api/v1/admin/suggestions/{first_id}/replies"),
        Some(json!({ "content": "Noted" })),
        Some(&root),
    )
    .await;

    let response = app
        .request(
            "DELETE",
            "/api/v1/admin/suggestions",
            Some(json!({ "ids": [first_id, second_id, 424242] })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["deleted"], 2);

    for code in [&first, &second] {
        let response = app
            .request("GET", &format!("/api/v1/suggestions/{code}"), None, None)
            .await;
        assert_eq!(response.status, StatusCode::NOT_FOUND);
    }
    let orphans: i64 =
        sqlx::query_scalar("SELECT COUNT(*) FROM replies WHERE suggestion_id IN (?1, ?2)")
            .bind(first_id)
            .bind(second_id)
            .fetch_one(app.db.pool())
            .await
            .unwrap();
    assert_eq!(orphans, 0);

    let response = app
        .request("GET", &format!("/api/v1/suggestions/{keep}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request(
            "DELETE",
            "/api/v1/admin/suggestions",
            Some(json!({ "ids": [] })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_bulk_delete_outside_scope_deletes_nothing() {
    let app = TestApp::new().await;
    let (_root, logi, logistics, academic) = scoped_setup(&app).await;

    let own = app.submit("Own", Some(logistics), false).await;
    let foreign = app.submit("Foreign", Some(academic), false).await;
    let own_id = app.suggestion_id(&own).await;
    let foreign_id = app.suggestion_id(&foreign).await;

    let response = app
        .request(
            "DELETE",
            "/api/v1/admin/suggestions",
            Some(json!({ "ids": [own_id, foreign_id] })),
            Some(&logi),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request("GET", &format!("/api/v1/suggestions/{own}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_dashboard_stats_are_scoped() {
    let app = TestApp::new().await;
    let (root, logi, logistics, academic) = scoped_setup(&app).await;

    let code = app.submit("Fix the gate", Some(logistics), false).await;
    app.submit("Another logistics", Some(logistics), false).await;
    app.submit("Academic matter", Some(academic), false).await;
    let id = app.suggestion_id(&code).await;
    app.request(
        "PUT",
        &format!("/api/v1/admin/suggestions/{id}/status"),
        Some(json!({ "status": "resolved" })),
        Some(&root),
    )
    .await;

    let response = app
        .request("GET", "/api/v1/admin/dashboard/stats", None, Some(&root))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 3);
    assert_eq!(response.body["resolved"], 1);
    assert_eq!(response.body["pending_review"], 2);
    assert_eq!(response.body["trend"].as_array().unwrap().len(), 7);

    let response = app
        .request("GET", "/api/v1/admin/dashboard/stats", None, Some(&logi))
        .await;
    assert_eq!(response.body["total"], 2);
    assert_eq!(response.body["resolved"], 1);
    assert_eq!(response.body["resolution_rate"], 50.0);
}

#[tokio::test]
async fn test_admin_management_requires_super_admin() {
    let app = TestApp::new().await;
    let (_root, logi, _, _) = scoped_setup(&app).await;

    let response = app
        .request("GET", "/api/v1/admin/users", None, Some(&logi))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "FORBIDDEN");

    let response = app
        .request(
            "POST",
            "/api/v1/admin/users",
            Some(json!({
                "username": "sneaky",
                "password": "sneakypass",
                "role": "super_admin",
            })),
            Some(&logi),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn test_admin_crud() {
    let app = TestApp::new().await;
    let root = app.root_token().await;
    let logistics = app.department_id("Logistics").await;
    let academic = app.department_id("Academic Affairs").await;

    let id = app
        .create_admin(
            &root,
            "staff1",
            "secret1",
            "department_admin",
            Some(logistics),
            false,
        )
        .await;

    let response = app
        .request(
            "POST",
            "/api/v1/admin/users",
            Some(json!({
                "username": "staff1",
                "password": "secret1",
                "role": "department_admin",
                "department_id": logistics,
            })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .request(
            "POST",
            "/api/v1/admin/users",
            Some(json!({
                "username": "staff2",
                "password": "123",
                "role": "department_admin",
                "department_id": logistics,
            })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/admin/users/{id}"),
            Some(json!({ "department_id": academic, "password": "newsecret" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["department_id"], academic);
    app.login("staff1", "newsecret").await;

    let response = app
        .request("GET", "/api/v1/admin/users", None, Some(&root))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 2);

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/admin/users/{id}"),
            None,
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/admin/users/{id}"),
            None,
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_root_admin_is_protected() {
    let app = TestApp::new().await;
    let root = app.root_token().await;

    let response = app
        .request("GET", "/api/v1/admin/users", None, Some(&root))
        .await;
    let root_id = response.body[0]["id"].as_i64().unwrap();
    assert_eq!(response.body[0]["is_root"], true);

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/admin/users/{root_id}"),
            Some(json!({ "role": "department_admin" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/admin/users/{root_id}"),
            None,
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    app.root_token().await;
}

#[tokio::test]
async fn test_admin_with_replies_cannot_be_deleted() {
    let app = TestApp::new().await;
    let (root, logi, logistics, _) = scoped_setup(&app).await;

    let code = app.submit("Lights", Some(logistics), false).await;
    let id = app.suggestion_id(&code).await;
    app.request(
        "POST",
        &format!("/api/v1/admin/suggestions/{id}/replies"),
        Some(json!({ "content": "On it" })),
        Some(&logi),
    )
    .await;

    let response = app
        .request("GET", "/api/v1/admin/users", None, Some(&root))
        .await;
    let logi_id = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .find(|a| a["username"] == "logi")
        .and_then(|a| a["id"].as_i64())
        .unwrap();

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/admin/users/{logi_id}"),
            None,
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}
