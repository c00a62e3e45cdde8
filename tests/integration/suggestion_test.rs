//! Integration tests for public suggestion intake, tracking, and upvotes.

mod helpers;

use http::StatusCode;
use serde_json::json;

use helpers::TestApp;

#[tokio::test]
async fn test_submit_and_track() {
    let app = TestApp::new().await;
    let academic = app.department_id("Academic Affairs").await;

    let response = app
        .request(
            "POST",
            "/api/v1/suggestions",
            Some(json!({
                "title": "Longer library hours",
                "content": "Please keep the library open until 22:00 during exams.",
                "category": "Facilities",
                "department_id": academic,
                "submitter_class": "11A",
            })),
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::CREATED);
    let code = response.body["tracking_code"].as_str().unwrap().to_string();
    assert_eq!(code.len(), 6);
    assert!(
        code.chars()
            .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit())
    );

    let response = app
        .request("GET", &format!("/api/v1/suggestions/{code}"), None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["tracking_code"], code.as_str());
    assert_eq!(response.body["title"], "Longer library hours");
    assert_eq!(response.body["status"], "pending-review");
    assert_eq!(response.body["upvotes"], 0);
    assert_eq!(response.body["is_public"], false);
    assert_eq!(response.body["department_id"], academic);
    assert_eq!(response.body["replies"], json!([]));
}

#[tokio::test]
async fn test_tracking_codes_are_unique() {
    let app = TestApp::new().await;

    let mut codes = std::collections::HashSet::new();
    for i in 0..20 {
        codes.insert(app.submit(&format!("Idea {i}"), None, false).await);
    }
    assert_eq!(codes.len(), 20);
}

#[tokio::test]
async fn test_unknown_tracking_code() {
    let app = TestApp::new().await;
    app.submit("Something", None, false).await;

    let response = app
        .request("GET", "/api/v1/suggestions/ZZZZZZ", None, None)
        .await;

    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.error_code(), "NOT_FOUND");
}

#[tokio::test]
async fn test_submit_validation() {
    let app = TestApp::new().await;

    let response = app
        .request(
            "POST",
            "/api/v1/suggestions",
            Some(json!({ "title": "", "content": "text" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");

    let response = app
        .request(
            "POST",
            "/api/v1/suggestions",
            Some(json!({ "title": "x".repeat(101), "content": "text" })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/api/v1/suggestions",
            Some(json!({ "title": "Ok", "content": "text", "department_id": 9999 })),
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_malformed_json_is_validation_error() {
    let app = TestApp::new().await;

    let req = http::Request::builder()
        .method("POST")
        .uri("/api/v1/suggestions")
        .header("Content-Type", "application/json")
        .body(axum::body::Body::from("{not json"))
        .unwrap();
    let response = app.send(req).await;

    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_public_list_hides_private_and_unreviewed() {
    let app = TestApp::new().await;
    let root = app.root_token().await;

    app.submit("Private", None, false).await;
    app.submit("Unreviewed", None, true).await;
    let reviewed = app.submit("Reviewed", None, true).await;

    let id = app.suggestion_id(&reviewed).await;
    let response = app
        .request(
            "PUT",
            &format!("/api/v1/admin/suggestions/{id}/status"),
            Some(json!({ "status": "in-progress" })),
            Some(&root),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let response = app
        .request("GET", "/api/v1/suggestions?page=1&pageSize=10", None, None)
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 1);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["page_size"], 10);
    assert_eq!(response.body["total_pages"], 1);
    assert_eq!(response.body["data"][0]["title"], "Reviewed");
}

#[tokio::test]
async fn test_public_list_department_filter_and_paging() {
    let app = TestApp::new().await;
    let root = app.root_token().await;
    let logistics = app.department_id("Logistics").await;
    let academic = app.department_id("Academic Affairs").await;

    for (title, dept) in [
        ("L1", logistics),
        ("L2", logistics),
        ("L3", logistics),
        ("A1", academic),
    ] {
        let code = app.submit(title, Some(dept), true).await;
        let id = app.suggestion_id(&code).await;
        app.request(
            "PUT",
            &format!("/api/v1/admin/suggestions/{id}/status"),
            Some(json!({ "status": "pending" })),
            Some(&root),
        )
        .await;
    }

    let response = app
        .request(
            "GET",
            &format!("/api/v1/suggestions?department_id={logistics}&pageSize=2&page=2"),
            None,
            None,
        )
        .await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["total"], 3);
    assert_eq!(response.body["total_pages"], 2);
    assert_eq!(response.body["data"].as_array().unwrap().len(), 1);

    // Garbage paging falls back to defaults.
    let response = app
        .request("GET", "/api/v1/suggestions?page=-4&pageSize=abc", None, None)
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["page"], 1);
    assert_eq!(response.body["total"], 4);
}

#[tokio::test]
async fn test_out_of_range_page_returns_empty_page() {
    let app = TestApp::new().await;
    let root = app.root_token().await;
    let code = app.submit("Bike racks", None, true).await;
    let id = app.suggestion_id(&code).await;
    app.request(
        "PUT",
        &format!("/api/v1/admin/suggestions/{id}/status"),
        Some(json!({ "status": "pending" })),
        Some(&root),
    )
    .await;

    for (path, token) in [
        ("/api/v1/suggestions", None),
        ("/api/v1/admin/suggestions", Some(root.as_str())),
    ] {
        let response = app
            .request(
                "GET",
                &format!("{path}?page=9223372036854775807&pageSize=100"),
                None,
                token,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "{path}: {:?}", response.body);
        assert_eq!(response.body["total"], 1);
        assert!(response.body["data"].as_array().unwrap().is_empty());
    }
}

#[tokio::test]
async fn test_upvote() {
    let app = TestApp::new().await;
    let code = app.submit("Water fountain", None, true).await;
    let id = app.suggestion_id(&code).await;

    let response = app
        .request(
            "POST",
            &format!("/api/v1/suggestions/{id}/upvote"),
            None,
            None,
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["upvotes"], 1);

    let response = app
        .request("POST", "/api/v1/suggestions/99999/upvote", None, None)
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request("POST", "/api/v1/suggestions/abc/upvote", None, None)
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_concurrent_upvotes_are_not_lost() {
    let app = TestApp::new().await;
    let code = app.submit("Bike racks", None, true).await;
    let id = app.suggestion_id(&code).await;
    let path = format!("/api/v1/suggestions/{id}/upvote");

    let (a, b) = futures::join!(
        app.request_from("203.0.113.1", "POST", &path, None, None),
        app.request_from("203.0.113.2", "POST", &path, None, None),
    );
    assert_eq!(a.status, StatusCode::OK);
    assert_eq!(b.status, StatusCode::OK);

    let response = app
        .request("GET", &format!("/api/v1/suggestions/{code}"), None, None)
        .await;
    assert_eq!(response.body["upvotes"], 2);
}

#[tokio::test]
async fn test_rate_limit_shared_across_guarded_routes() {
    let app = TestApp::with_rate_limit(3).await;
    let client = "203.0.113.50";

    let submit = || {
        app.request_from(
            client,
            "POST",
            "/api/v1/suggestions",
            Some(json!({ "title": "Spam", "content": "again" })),
            None,
        )
    };

    let first = submit().await;
    assert_eq!(first.status, StatusCode::CREATED);
    let code = first.body["tracking_code"].as_str().unwrap().to_string();

    let lookup = app
        .request_from(
            client,
            "GET",
            &format!("/api/v1/suggestions/{code}"),
            None,
            None,
        )
        .await;
    assert_eq!(lookup.status, StatusCode::OK);
    assert_eq!(submit().await.status, StatusCode::CREATED);

    let fourth = submit().await;
    assert_eq!(fourth.status, StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(fourth.error_code(), "RATE_LIMITED");
    assert!(fourth.retry_after.is_some());

    // Other clients and unguarded routes are unaffected.
    let other = app
        .request_from(
            "203.0.113.51",
            "POST",
            "/api/v1/suggestions",
            Some(json!({ "title": "Fine", "content": "ok" })),
            None,
        )
        .await;
    assert_eq!(other.status, StatusCode::CREATED);

    let listing = app
        .request_from(client, "GET", "/api/v1/suggestions", None, None)
        .await;
    assert_eq!(listing.status, StatusCode::OK);
}

#[tokio::test]
async fn test_public_departments() {
    let app = TestApp::new().await;

    let response = app.request("GET", "/api/v1/departments", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<&str> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|d| d["name"].as_str())
        .collect();
    assert_eq!(names.len(), 3);
    assert!(names.contains(&"Logistics"));
}
