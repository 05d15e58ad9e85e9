//! Recipe endpoints: validation, owner writes, and the shared read path.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::json;

use crate::helpers::TestApp;

#[tokio::test]
async fn recipes_are_validated_with_400s() {
    let app = TestApp::new();
    let token = app.sign_in("alice").await;
    let salt = app.ingredient(&token, "Muối").await;

    let cases = [
        json!({ "name": "Phở", "ingredients": [] }),
        json!({ "name": "   ", "ingredients": [{ "id": salt, "quantity": 1, "unit": "pinch" }] }),
        json!({ "name": "x".repeat(31), "ingredients": [{ "id": salt, "quantity": 1, "unit": "pinch" }] }),
        json!({ "name": "Phở", "ingredients": [{ "id": salt, "quantity": 1, "unit": "bucket" }] }),
        json!({ "name": "Phở", "ingredients": [{ "id": salt, "quantity": -1, "unit": "gram" }] }),
        json!({ "name": "Phở", "ingredients": [{ "id": salt, "quantity": 0, "unit": "gram" }] }),
        json!({ "name": "Phở", "note": "n".repeat(201), "ingredients": [{ "id": salt, "quantity": 1, "unit": "gram" }] }),
        json!({
            "name": "Phở",
            "ingredients": [{ "id": "00000000-0000-0000-0000-000000000000", "quantity": 1, "unit": "gram" }],
        }),
    ];

    for body in cases {
        let response = app
            .request("POST", "/recipes", Some(body.clone()), Some(&token))
            .await;
        assert_eq!(
            response.status,
            StatusCode::BAD_REQUEST,
            "expected 400 for {body}: {:?}",
            response.body
        );
        assert_eq!(response.error_code(), "VALIDATION_ERROR");
    }
}

#[tokio::test]
async fn malformed_json_is_a_400_not_a_422() {
    let app = TestApp::new();
    let token = app.sign_in("alice").await;

    let req = Request::builder()
        .method("POST")
        .uri("/recipes")
        .header("Authorization", format!("Bearer {token}"))
        .header("Content-Type", "application/json")
        .body(Body::from("{\"name\": "))
        .unwrap();
    let response = app.send(req).await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);

    let response = app
        .request("GET", "/recipes/not-a-uuid", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn created_recipes_resolve_ingredient_names() {
    let app = TestApp::new();
    let token = app.sign_in("alice").await;
    let beef = app.ingredient(&token, "Thịt bò").await;

    let created = app
        .request(
            "POST",
            "/recipes",
            Some(json!({
                "name": "  Phở bò ",
                "note": "",
                "ingredients": [{ "id": beef, "quantity": 0.5, "unit": "cup" }],
            })),
            Some(&token),
        )
        .await;
    assert_eq!(created.status, StatusCode::CREATED);
    assert_eq!(created.body["name"], "Phở bò");
    assert!(created.body.get("note").is_none());

    let fetched = app
        .request("GET", &format!("/recipes/{}", created.id()), None, Some(&token))
        .await;
    assert_eq!(fetched.status, StatusCode::OK);
    assert_eq!(fetched.body["ingredients"][0]["name"], "Thịt bò");
    assert_eq!(fetched.body["ingredients"][0]["unit"], "cup");
    assert_eq!(fetched.body["createdBy"], "alice");
}

#[tokio::test]
async fn search_filters_and_sorts_by_name() {
    let app = TestApp::new();
    let token = app.sign_in("alice").await;
    for name in ["Phở gà", "Bánh mì", "PHỞ bò", "Chè"] {
        app.recipe(&token, name).await;
    }

    let response = app
        .request("GET", "/recipes?search=ph%E1%BB%9F", None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);
    let names: Vec<_> = response
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["PHỞ bò", "Phở gà"]);

    let all = app.request("GET", "/recipes", None, Some(&token)).await;
    let names: Vec<_> = all
        .body
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["name"].as_str().unwrap().to_string())
        .collect();
    assert_eq!(names, ["Bánh mì", "Chè", "PHỞ bò", "Phở gà"]);
}

#[tokio::test]
async fn strangers_get_a_generic_forbidden() {
    let app = TestApp::new();
    let alice = app.sign_in("alice").await;
    let bob = app.sign_in("bob").await;
    let recipe = app.recipe(&alice, "Bún chả").await;

    let list = app
        .request("GET", "/recipes?userId=alice", None, Some(&bob))
        .await;
    assert_eq!(list.status, StatusCode::FORBIDDEN);
    assert_eq!(list.error_code(), "FORBIDDEN");

    app.invite_link(&alice, &recipe).await;
    let one = app
        .request("GET", &format!("/recipes/{recipe}"), None, Some(&bob))
        .await;
    assert_eq!(one.status, StatusCode::FORBIDDEN);
    assert_eq!(one.body["message"], list.body["message"]);
}

#[tokio::test]
async fn only_owners_update_and_delete() {
    let app = TestApp::new();
    let alice = app.sign_in("alice").await;
    let bob = app.sign_in("bob").await;
    let recipe = app.recipe(&alice, "Cơm chiên").await;
    let rice = app.ingredient(&alice, "Gạo").await;
    let body = json!({
        "name": "Cơm chiên trứng",
        "ingredients": [{ "id": rice, "quantity": 2, "unit": "cup" }],
    });
    let path = format!("/recipes/{recipe}");

    let response = app
        .request("PUT", &path, Some(body.clone()), Some(&bob))
        .await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);
    let response = app.request("DELETE", &path, None, Some(&bob)).await;
    assert_eq!(response.status, StatusCode::FORBIDDEN);

    let response = app.request("PUT", &path, Some(body), Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["name"], "Cơm chiên trứng");

    let response = app.request("DELETE", &path, None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::OK);
    let response = app.request("GET", &path, None, Some(&alice)).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ingredients_in_use_answer_409_on_delete() {
    let app = TestApp::new();
    let alice = app.sign_in("alice").await;
    let ingredient = app.ingredient(&alice, "Rau thơm").await;
    let recipe = app
        .request(
            "POST",
            "/recipes",
            Some(json!({
                "name": "Gỏi",
                "ingredients": [{ "id": ingredient, "quantity": 1, "unit": "piece" }],
            })),
            Some(&alice),
        )
        .await
        .id();
    let ingredient_path = format!("/ingredients/{ingredient}");

    let response = app
        .request("DELETE", &ingredient_path, None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::CONFLICT);
    assert_eq!(response.error_code(), "CONFLICT");

    let response = app
        .request("GET", &format!("/recipes/{recipe}"), None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    app.request("DELETE", &format!("/recipes/{recipe}"), None, Some(&alice))
        .await;
    let response = app
        .request("DELETE", &ingredient_path, None, Some(&alice))
        .await;
    assert_eq!(response.status, StatusCode::OK);
}

#[tokio::test]
async fn recipes_reject_ingredients_owned_by_others() {
    let app = TestApp::new();
    let alice = app.sign_in("alice").await;
    let bob = app.sign_in("bob").await;
    let salt = app.ingredient(&alice, "Muối").await;

    let response = app
        .request(
            "POST",
            "/recipes",
            Some(json!({
                "name": "Cháo",
                "ingredients": [{ "id": salt, "quantity": 1, "unit": "pinch" }],
            })),
            Some(&bob),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.error_code(), "VALIDATION_ERROR");
}
