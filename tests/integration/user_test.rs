//! User profile endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn first_visit_stores_the_profile_once() {
    let app = TestApp::new();
    let token = app.token("alice");

    let first = app.request("POST", "/users", None, Some(&token)).await;
    assert_eq!(first.status, StatusCode::CREATED);
    assert_eq!(first.body["userId"], "alice");
    assert_eq!(first.body["email"], "alice@example.com");

    let again = app
        .request(
            "POST",
            "/users",
            Some(json!({ "firstName": "Changed" })),
            Some(&token),
        )
        .await;
    assert_eq!(again.status, StatusCode::OK);
    assert_eq!(again.body["firstName"], "alice");
}

#[tokio::test]
async fn supplied_fields_win_over_claims() {
    let app = TestApp::new();
    let token = app.token("bob");

    let response = app
        .request(
            "POST",
            "/users",
            Some(json!({ "firstName": "Bob", "avatar": "https://img.example/bob.png" })),
            Some(&token),
        )
        .await;
    assert_eq!(response.status, StatusCode::CREATED);
    assert_eq!(response.body["firstName"], "Bob");
    assert_eq!(response.body["avatar"], "https://img.example/bob.png");
    assert_eq!(response.body["email"], "bob@example.com");
}

#[tokio::test]
async fn directory_lists_and_fetches_profiles() {
    let app = TestApp::new();
    let token = app.sign_in("alice").await;
    app.sign_in("bob").await;

    let list = app.request("GET", "/users", None, Some(&token)).await;
    assert_eq!(list.status, StatusCode::OK);
    assert_eq!(list.body.as_array().map(Vec::len), Some(2));

    let one = app.request("GET", "/users/bob", None, Some(&token)).await;
    assert_eq!(one.status, StatusCode::OK);
    assert_eq!(one.body["userId"], "bob");

    let missing = app.request("GET", "/users/nobody", None, Some(&token)).await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}
