//! Invite link lifecycle over HTTP.

use axum::http::StatusCode;
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn create_is_201_then_200_with_the_same_id() {
    let app = TestApp::new();
    let alice = app.sign_in("alice").await;
    let recipe = app.recipe(&alice, "Phở").await;
    let body = json!({ "recipeId": recipe });

    let first = app
        .request("POST", "/inviteLinks", Some(body.clone()), Some(&alice))
        .await;
    assert_eq!(first.status, StatusCode::CREATED);
    let second = app
        .request("POST", "/inviteLinks", Some(body), Some(&alice))
        .await;
    assert_eq!(second.status, StatusCode::OK);
    assert_eq!(first.body["inviteLinkId"], second.body["inviteLinkId"]);

    let mine = app.request("GET", "/inviteLinks", None, Some(&alice)).await;
    assert_eq!(mine.body.as_array().map(Vec::len), Some(1));
}

#[tokio::test]
async fn create_checks_recipe_and_ownership() {
    let app = TestApp::new();
    let alice = app.sign_in("alice").await;
    let bob = app.sign_in("bob").await;
    let recipe = app.recipe(&alice, "Phở").await;

    let response = app
        .request("POST", "/inviteLinks", Some(json!({})), Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "POST",
            "/inviteLinks",
            Some(json!({ "recipeId": "00000000-0000-0000-0000-000000000000" })),
            Some(&alice),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    let response = app
        .request(
            "POST",
            "/inviteLinks",
            Some(json!({ "recipeId": recipe })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn accept_revoke_restore_scenario() {
    let app = TestApp::new();
    let a = app.sign_in("user-a").await;
    let b = app.sign_in("user-b").await;
    let recipe = app.recipe(&a, "Bún bò Huế").await;
    let link = app.invite_link(&a, &recipe).await;
    let recipe_path = format!("/recipes/{recipe}");

    let response = app
        .request("PUT", &format!("/inviteLinks/{link}/accept"), None, Some(&b))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let shared = app
        .request("GET", "/inviteLinks/invited?userId=user-b", None, Some(&b))
        .await;
    assert_eq!(shared.status, StatusCode::OK);
    assert_eq!(shared.body[0]["id"], link);
    assert_eq!(shared.body[0]["creator"]["userId"], "user-a");
    assert_eq!(shared.body[0]["creator"]["firstName"], "user-a");

    let book = app
        .request("GET", "/recipes?userId=user-a", None, Some(&b))
        .await;
    assert_eq!(book.status, StatusCode::OK);
    assert_eq!(book.body[0]["name"], "Bún bò Huế");
    let one = app.request("GET", &recipe_path, None, Some(&b)).await;
    assert_eq!(one.status, StatusCode::OK);

    let response = app
        .request(
            "PUT",
            &format!("/inviteLinks/{link}/revoke?userId=user-b"),
            None,
            Some(&a),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let one = app.request("GET", &recipe_path, None, Some(&b)).await;
    assert_eq!(one.status, StatusCode::FORBIDDEN);
    let shared = app
        .request("GET", "/inviteLinks/invited?userId=user-b", None, Some(&b))
        .await;
    assert_eq!(shared.body, json!([]));

    let response = app
        .request("PUT", &format!("/inviteLinks/{link}/accept"), None, Some(&b))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    assert_eq!(response.error_code(), "ACCESS_REVOKED");

    let response = app
        .request(
            "PUT",
            &format!("/inviteLinks/{link}/restore?userId=user-b"),
            None,
            Some(&a),
        )
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let one = app.request("GET", &recipe_path, None, Some(&b)).await;
    assert_eq!(one.status, StatusCode::OK);

    let roster = app
        .request("GET", &format!("/inviteLinks/{link}"), None, Some(&a))
        .await;
    assert_eq!(roster.body["invitedUsers"].as_array().map(Vec::len), Some(1));
    assert_eq!(roster.body["invitedUsers"][0]["accessRevoked"], false);
}

#[tokio::test]
async fn roster_changes_need_the_owner_and_a_target() {
    let app = TestApp::new();
    let a = app.sign_in("alice").await;
    let b = app.sign_in("bob").await;
    let recipe = app.recipe(&a, "Chả cá").await;
    let link = app.invite_link(&a, &recipe).await;
    app.request("PUT", &format!("/inviteLinks/{link}/accept"), None, Some(&b))
        .await;

    let response = app
        .request("PUT", &format!("/inviteLinks/{link}/revoke"), None, Some(&a))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request(
            "PUT",
            &format!("/inviteLinks/{link}/revoke?userId=bob"),
            None,
            Some(&b),
        )
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app
        .request(
            "PUT",
            &format!("/inviteLinks/{link}/restore?userId=carol"),
            None,
            Some(&a),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_links_and_shared_listing_rules() {
    let app = TestApp::new();
    let b = app.sign_in("bob").await;

    let response = app
        .request(
            "PUT",
            "/inviteLinks/00000000-0000-0000-0000-000000000000/accept",
            None,
            Some(&b),
        )
        .await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);

    for path in ["/inviteLinks/not-a-link/accept", "/inviteLinks/not-a-link"] {
        let method = if path.ends_with("accept") { "PUT" } else { "GET" };
        let response = app.request(method, path, None, Some(&b)).await;
        assert_eq!(response.status, StatusCode::NOT_FOUND, "{path}");
    }

    let response = app
        .request("GET", "/inviteLinks/invited", None, Some(&b))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/inviteLinks/invited?userId=alice", None, Some(&b))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
}

#[tokio::test]
async fn owners_accepting_their_own_link_change_nothing() {
    let app = TestApp::new();
    let a = app.sign_in("alice").await;
    let recipe = app.recipe(&a, "Xôi gấc").await;
    let link = app.invite_link(&a, &recipe).await;

    let response = app
        .request("PUT", &format!("/inviteLinks/{link}/accept"), None, Some(&a))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    let roster = app
        .request("GET", &format!("/inviteLinks/{link}"), None, Some(&a))
        .await;
    assert_eq!(roster.body["invitedUsers"], json!([]));
}

#[tokio::test]
async fn missing_creator_profiles_are_server_defects() {
    let app = TestApp::new();
    // the owner never registers a profile
    let ghost = app.token("ghost");
    let b = app.sign_in("bob").await;
    let recipe = app.recipe(&ghost, "Bánh canh").await;
    let link = app.invite_link(&ghost, &recipe).await;
    app.request("PUT", &format!("/inviteLinks/{link}/accept"), None, Some(&b))
        .await;

    let response = app
        .request("GET", "/inviteLinks/invited?userId=bob", None, Some(&b))
        .await;
    assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response.error_code(), "DATA_INTEGRITY_ERROR");
}
