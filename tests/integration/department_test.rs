//! Integration tests for department management.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_department_crud() {
    let app = TestApp::new().await;
    let root = app.root_token().await;

    let response = app
        .request(
            "POST",
            "/api/v1/admin/departments",
            Some(json!({ "name": "Library" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    let id = response.body["id"].as_i64().unwrap();

    let response = app
        .request(
            "POST",
            "/api/v1/admin/departments",
            Some(json!({ "name": "Library" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/admin/departments/{id}"),
            Some(json!({ "name": "Library & Archives" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Library & Archives");

    let response = app
        .request("GET", "/api/v1/admin/departments", None, Some(&root))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body.as_array().unwrap().len(), 4);

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/admin/departments/{id}"),
            None,
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request(
            "PUT",
            &format!("/api/v1/admin/departments/{id}"),
            Some(json!({ "name": "Ghost" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_department_name_validation() {
    let app = TestApp::new().await;
    let root = app.root_token().await;

    let too_long = "x".repeat(51);
    for name in ["", "   ", too_long.as_str()] {
        let response = app
            .request(
                "POST",
                "/api/v1/admin/departments",
                Some(json!({ "name": name })),
                Some(&root),
            )
            .await;
        assert_eq!(response.status, StatusCode::BAD_REQUEST, "name {name:?}");
    }
}

#[tokio::test]
async fn test_department_in_use_by_admin_cannot_be_deleted() {
    let app = TestApp::new().await;
    let root = app.root_token().await;
    let logistics = app.department_id("Logistics").await;
    app.create_admin(
        &root,
        "logi",
        "logipass",
        "department_admin",
        Some(logistics),
        false,
    )
    .await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/admin/departments/{logistics}"),
            None,
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_deleting_department_readdresses_suggestions() {
    let app = TestApp::new().await;
    let root = app.root_token().await;
    let student_affairs = app.department_id("Student Affairs").await;
    let code = app.submit("Club fair", Some(student_affairs), false).await;

    let response = app
        .request(
            "DELETE",
            &format!("/api/v1/admin/departments/{student_affairs}"),
            None,
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::NO_CONTENT);

    let response = app
        .request("GET", &format!("/api/v1/suggestions/{code}"), None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["department_id"].is_null());
}

#[tokio::test]
async fn test_department_admin_cannot_manage_departments() {
    let app = TestApp::new().await;
    let root = app.root_token().await;
    let logistics = app.department_id("Logistics").await;
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

    let response = app
        .request("GET", "/api/v1/admin/departments", None, Some(&logi))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "POST",
            "/api/v1/admin/departments",
            Some(json!({ "name": "Shadow" })),
            Some(&logi),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
