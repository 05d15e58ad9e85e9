//! Identity resolution at the HTTP edge.

use axum::http::StatusCode;

use recipebox_auth::JwtEncoder;
use recipebox_core::config::auth::AuthConfig;
use recipebox_core::types::UserId;

use crate::helpers::TestApp;

#[tokio::test]
async fn health_needs_no_token() {
    let app = TestApp::new();

    let response = app.request("GET", "/health", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "ok");

    let response = app.request("GET", "/health/detailed", None, None).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["store"], "memory");
    assert_eq!(response.body["store_status"], "connected");
}

#[tokio::test]
async fn missing_or_malformed_tokens_are_unauthenticated() {
    let app = TestApp::new();

    let response = app.request("GET", "/recipes", None, None).await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.error_code(), "UNAUTHENTICATED");

    let response = app
        .request("GET", "/recipes", None, Some("not.a.token"))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn tokens_signed_with_another_secret_are_rejected() {
    let app = TestApp::new();
    let foreign = JwtEncoder::new(&AuthConfig {
        jwt_secret: "someone-else".into(),
        ..AuthConfig::default()
    })
    .issue(&UserId::new("mallory"), Default::default())
    .unwrap()
    .0;

    let response = app
        .request("GET", "/inviteLinks", None, Some(&foreign))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn valid_tokens_reach_handlers() {
    let app = TestApp::new();
    let token = app.token("alice");

    let response = app.request("GET", "/recipes", None, Some(&token)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body, serde_json::json!([]));
}
