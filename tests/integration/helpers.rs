//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use tower::ServiceExt;

use recipebox_api::{AppState, build_app};
use recipebox_core::config::AppConfig;
use recipebox_core::types::UserId;
use recipebox_database::{MemoryStore, Stores};
use recipebox_entity::user::UpsertUser;

pub const TEST_SECRET: &str = "integration-test-secret";

/// Test application context
pub struct TestApp {
    /// The Axum app for making test requests
    pub router: Router,
    /// Application state, for minting tokens
    pub state: AppState,
}

impl TestApp {
    /// Create a new test application over a fresh in-memory store
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        config.auth.jwt_secret = TEST_SECRET.to_string();

        let state = AppState::new(config, Stores::memory(MemoryStore::new()));
        let router = build_app(state.clone());

        Self { router, state }
    }

    /// A bearer token for `user_id` carrying a first-name claim
    pub fn token(&self, user_id: &str) -> String {
        let profile = UpsertUser {
            first_name: user_id.to_string(),
            email: format!("{user_id}@example.com"),
            ..Default::default()
        };
        self.state
            .jwt_encoder
            .issue(&UserId::new(user_id), profile)
            .expect("Failed to issue token")
            .0
    }

    /// Store a profile for `user_id` and return its token
    pub async fn sign_in(&self, user_id: &str) -> String {
        let token = self.token(user_id);
        let response = self.request("POST", "/users", None, Some(&token)).await;
        assert!(
            response.status.is_success(),
            "Profile registration failed: {:?}",
            response.body
        );
        token
    }

    /// Create an ingredient and return its id
    pub async fn ingredient(&self, token: &str, name: &str) -> String {
        let response = self
            .request("POST", "/ingredients", Some(json!({ "name": name })), Some(token))
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Create a one-ingredient recipe and return its id
    pub async fn recipe(&self, token: &str, name: &str) -> String {
        let ingredient = self.ingredient(token, &format!("{name} base")).await;
        let response = self
            .request(
                "POST",
                "/recipes",
                Some(json!({
                    "name": name,
                    "ingredients": [{ "id": ingredient, "quantity": 250, "unit": "gram" }],
                })),
                Some(token),
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "{:?}", response.body);
        response.id()
    }

    /// Create (or get) the invite link of a recipe and return its id
    pub async fn invite_link(&self, token: &str, recipe_id: &str) -> String {
        let response = self
            .request(
                "POST",
                "/inviteLinks",
                Some(json!({ "recipeId": recipe_id })),
                Some(token),
            )
            .await;
        assert!(response.status.is_success(), "{:?}", response.body);
        response.body["inviteLinkId"]
            .as_str()
            .expect("No inviteLinkId in response")
            .to_string()
    }

    /// Make an HTTP request to the test app
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let mut req = Request::builder().method(method).uri(path);

        if let Some(token) = token {
            req = req.header("Authorization", format!("Bearer {token}"));
        }

        let req = match body {
            Some(body) => req
                .header("Content-Type", "application/json")
                .body(Body::from(
                    serde_json::to_vec(&body).expect("Failed to serialize body"),
                )),
            None => req.body(Body::empty()),
        }
        .expect("Failed to build request");

        self.send(req).await
    }

    /// Send a raw request, for bodies that are not valid JSON
    pub async fn send(&self, req: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(req)
            .await
            .expect("Failed to send request");

        let status = response.status();
        let body_bytes = response
            .into_body()
            .collect()
            .await
            .expect("Failed to read body")
            .to_bytes();

        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);

        TestResponse { status, body }
    }
}

/// Response from a test request
#[derive(Debug)]
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body
    pub body: Value,
}

impl TestResponse {
    /// The `id` field of the body
    pub fn id(&self) -> String {
        self.body["id"]
            .as_str()
            .expect("No id in response")
            .to_string()
    }

    /// The `error` code of an error body
    pub fn error_code(&self) -> &str {
        self.body["error"].as_str().unwrap_or_default()
    }
}
