//! Shared test helpers for integration tests.

#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use suggestbox_core::config::AppConfig;
use suggestbox_database::DatabasePool;

/// Root credentials seeded by the test configuration.
pub const ROOT_USERNAME: &str = "root";
pub const ROOT_PASSWORD: &str = "rootpass1";

/// Address used when a test does not pick one.
const DEFAULT_CLIENT: &str = "198.51.100.1";

fn test_config(max_requests: usize) -> String {
    format!(
        r#"
[database]
url = "sqlite::memory:"

[auth]
jwt_secret = "integration-test-secret"

[rate_limit]
max_requests = {max_requests}
window_seconds = 60
trust_forwarded_for = true

[bootstrap]
root_username = "{ROOT_USERNAME}"
root_password = "{ROOT_PASSWORD}"
departments = ["Academic Affairs", "Logistics", "Student Affairs"]

[logging]
level = "warn"
"#
    )
}

/// Test application context
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
    /// Database pool for direct queries
    pub db: DatabasePool,
    /// Application config
    pub config: AppConfig,
}

impl TestApp {
    /// Create a test application with a rate limit high enough to stay out
    /// of the way.
    pub async fn new() -> Self {
        Self::with_rate_limit(10_000).await
    }

    /// Create a test application with a specific public rate limit.
    pub async fn with_rate_limit(max_requests: usize) -> Self {
        let config =
            AppConfig::from_toml(&test_config(max_requests)).expect("Failed to load test config");

        let db = DatabasePool::connect(&config.database)
            .await
            .expect("Failed to open test database");

        let state = suggestbox_api::initialize(config.clone(), db.clone())
            .await
            .expect("Failed to initialize app");
        let router = suggestbox_api::build_app(state);

        Self { router, db, config }
    }

    /// Make an HTTP request from the default client address.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        self.request_from(DEFAULT_CLIENT, method, path, body, token)
            .await
    }

    /// Make an HTTP request that appears to come from `client`.
    pub async fn request_from(
        &self,
        client: &str,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body
            .map(|b| serde_json::to_string(&b).expect("Failed to serialize body"))
            .unwrap_or_default();

        let mut req = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json")
            .header("X-Forwarded-For", client);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        self.send(req.body(Body::from(body_str)).expect("Failed to build request"))
            .await
    }

    /// Send a prebuilt request.
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let retry_after = response
            .headers()
            .get("retry-after")
            .and_then(|v| v.to_str().ok())
            .map(String::from);
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read body");

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse {
            status,
            body,
            retry_after,
        }
    }

    /// Login and return the session token.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/admin/login",
                Some(json!({ "username": username, "password": password })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );

        response.body["token"]
            .as_str()
            .expect("No token in login response")
            .to_string()
    }

    /// Token for the seeded root super admin.
    pub async fn root_token(&self) -> String {
        self.login(ROOT_USERNAME, ROOT_PASSWORD).await
    }

    /// ID of a seeded department by name.
    pub async fn department_id(&self, name: &str) -> i64 {
        let response = self.request("GET", "/api/v1/departments", None, None).await;
        response
            .body
            .as_array()
            .expect("Department list is not an array")
            .iter()
            .find(|d| d["name"] == name)
            .and_then(|d| d["id"].as_i64())
            .unwrap_or_else(|| panic!("Department '{name}' not seeded"))
    }

    /// Create an admin through the API and return its ID.
    pub async fn create_admin(
        &self,
        token: &str,
        username: &str,
        password: &str,
        role: &str,
        department_id: Option<i64>,
        can_view_all: bool,
    ) -> i64 {
        let response = self
            .request(
                "POST",
                "/api/v1/admin/users",
                Some(json!({
                    "username": username,
                    "password": password,
                    "role": role,
                    "department_id": department_id,
                    "can_view_all": can_view_all,
                })),
                Some(token),
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Create admin failed: {:?}",
            response.body
        );
        response.body["id"].as_i64().expect("No id in admin")
    }

    /// Submit a suggestion and return its tracking code.
    pub async fn submit(&self, title: &str, department_id: Option<i64>, is_public: bool) -> String {
        let response = self
            .request(
                "POST",
                "/api/v1/suggestions",
                Some(json!({
                    "title": title,
                    "content": format!("Details about {title}"),
                    "department_id": department_id,
                    "is_public": is_public,
                })),
                None,
            )
            .await;

        assert_eq!(
            response.status,
            StatusCode::CREATED,
            "Submit failed: {:?}",
            response.body
        );
        response.body["tracking_code"]
            .as_str()
            .expect("No tracking_code in response")
            .to_string()
    }

    /// Resolve a tracking code to the suggestion ID.
    pub async fn suggestion_id(&self, tracking_code: &str) -> i64 {
        let response = self
            .request(
                "GET",
                &format!("/api/v1/suggestions/{tracking_code}"),
                None,
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["id"].as_i64().expect("No id in suggestion")
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
    /// `Retry-After` header, if present
    pub retry_after: Option<String>,
}

impl TestResponse {
    /// The machine-readable error code of an error body.
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
