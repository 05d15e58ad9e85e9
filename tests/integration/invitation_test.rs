//! Legacy invitation endpoints.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn invitations_are_created_once_and_resolved_once() {
    let app = TestApp::new();
    let alice = app.sign_in("alice").await;
    let recipe = app.recipe(&alice, "Bánh flan").await;
    let body = json!({ "recipeId": recipe });

    let first = app
        .request("POST", "/invitations", Some(body.clone()), Some(&alice))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    let second = app
        .request("POST", "/invitations", Some(body), Some(&alice))
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body["invitationId"], second.body["invitationId"]);

    let id = first.body["invitationId"].as_str().unwrap().to_string();
    let path = format!("/invitations/{id}");

    let response = app
        .request("PATCH", &path, Some(json!({ "status": "maybe" })), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("PATCH", &path, Some(json!({ "status": "declined" })), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["status"], "declined");

    let response = app
        .request("PATCH", &path, Some(json!({ "status": "accepted" })), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let list = app.request("GET", "/invitations", None, Some(&alice)).await;
    assert_eq!(list.body.as_array().map(Vec::len), Some(1));

    let response = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn other_users_cannot_touch_an_invitation() {
    let app = TestApp::new();
    let alice = app.sign_in("alice").await;
    let bob = app.sign_in("bob").await;
    let recipe = app.recipe(&alice, "Sữa chua").await;
    let created = app
        .request(
            "POST",
            "/invitations",
            Some(json!({ "recipeId": recipe })),
            Some(&alice),
        )
        .await;
    let path = format!(
        "/invitations/{}",
        created.body["invitationId"].as_str().unwrap()
    );

    let response = app
        .request("PATCH", &path, Some(json!({ "status": "accepted" })), Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let response = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}
