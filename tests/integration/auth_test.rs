//! Integration tests for admin login and bearer-token handling.

mod helpers;

use chrono::{Duration, Utc};
use http::StatusCode;
use serde_json::json;

use suggestbox_auth::jwt::JwtEncoder;
use suggestbox_database::repositories::AdminRepository;

use helpers::{ROOT_PASSWORD, ROOT_USERNAME, TestApp};

#[tokio::test]
async fn test_login_success() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/admin/login",
            Some(json!({ "username": ROOT_USERNAME, "password": ROOT_PASSWORD })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert!(response.body["token"].as_str().is_some());
    assert_eq!(response.body["admin"]["username"], ROOT_USERNAME);
    assert_eq!(response.body["admin"]["role"], "super_admin");
    assert!(response.body["admin"].get("password_hash").is_none());
}

#[tokio::test]
async fn test_login_invalid_password() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/admin/login",
            Some(json!({ "username": ROOT_USERNAME, "password": "wrong-password" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHORIZED");
}

#[tokio::test]
async fn test_login_nonexistent_user() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/admin/login",
            Some(json!({ "username": "nobody", "password": "password123" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/admin/login",
            Some(json!({ "username": "", "password": "x" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app
        .request(
            "POST",
            "/api/v1/admin/login",
            Some(json!({ "username": "root" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = TestApp::new().await;

    let response = app
        .request("GET", "/api/v1/admin/suggestions", None, None)
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Authorization header is required");
}

#[tokio::test]
async fn test_wrong_authorization_scheme() {
    let app = TestApp::new().await;

    let req = http::Request::builder()
        .method("GET")
        .uri("/api/v1/admin/suggestions")
        .header("Authorization", "Basic cm9vdDpyb290")
        .body(axum::body::Body::empty())
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(
        response.body["message"],
        "Authorization header format must be Bearer {token}"
    );
}

#[tokio::test]
async fn test_garbage_token_rejected() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "GET",
            "/api/v1/admin/dashboard/stats",
            None,
            Some("not-a-token"),
        )
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Invalid token");
}

#[tokio::test]
async fn test_expired_token_rejected() {
    let app = TestApp::new().await;
    let root = AdminRepository::new(app.db.pool().clone())
        .find_by_username(ROOT_USERNAME)
        .await
        .unwrap()
        .unwrap();

    let encoder = JwtEncoder::new(&app.config.auth);
    let stale = encoder
        .issue_at(&root, Utc::now() - Duration::hours(25))
        .unwrap();
    let fresh = encoder
        .issue_at(&root, Utc::now() - Duration::hours(23))
        .unwrap();

    let response = app
        .request("GET", "/api/v1/admin/dashboard/stats", None, Some(&stale))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Token has expired");

    let response = app
        .request("GET", "/api/v1/admin/dashboard/stats", None, Some(&fresh))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn test_department_admin_login_carries_department() {
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
            "POST",
            "/api/v1/admin/login",
            Some(json!({ "username": "logi", "password": "logipass" })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["admin"]["role"], "department_admin");
    assert_eq!(response.body["admin"]["department_id"], logistics);
}

#[tokio::test]
async fn test_health() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/v1/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");
    assert_eq!(response.body["database"], "connected");
}
