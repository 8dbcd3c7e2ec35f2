//! 用户接口集成测试

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn create_user_hides_password() {
    let app = setup_app().await;

    let response = post(&app, "/user", user_body("Luke", "luke@tatooine.net")).await;
    assert_eq!(response.status, StatusCode::CREATED);

    let body = response.json();
    assert_eq!(body["full_name"], "Luke Skywalker");
    assert_eq!(body["is_active"], true);
    assert!(body.get("password").is_none());

    let list = get(&app, "/user").await;
    assert_eq!(list.status, StatusCode::OK);
    assert!(!list.text.contains("password"));
    assert!(!list.text.contains("use-the-force"));
}

#[tokio::test]
async fn user_list_with_trailing_slash() {
    let app = setup_app().await;
    create(&app, "/user", user_body("Han", "han@corellia.net")).await;

    let plain = get(&app, "/user").await;
    let slashed = get(&app, "/user/").await;
    assert_eq!(slashed.status, StatusCode::OK);
    assert_eq!(slashed.json(), plain.json());
    assert_eq!(slashed.json()[0]["email"], "han@corellia.net");
}

#[tokio::test]
async fn get_user_embeds_favorites() {
    let app = setup_app().await;
    let user_id = create(&app, "/user", user_body("Leia", "leia@alderaan.gov")).await;
    let planet_id = create(&app, "/planets", planet_body("Alderaan")).await;

    let response = post(
        &app,
        &format!("/favorite/planet/{planet_id}"),
        json!({ "user_id": user_id }),
    )
    .await;
    assert_eq!(response.status, StatusCode::CREATED);

    let detail = get(&app, &format!("/user/{user_id}")).await;
    assert_eq!(detail.status, StatusCode::OK);

    let body = detail.json();
    assert_eq!(body["first_name"], "Leia");
    assert!(body.get("password").is_none());
    assert_eq!(body["favorites_planets"][0]["planet"], "Alderaan");
    assert_eq!(body["favorites_people"], json!([]));
}

#[tokio::test]
async fn patch_changes_only_supplied_fields() {
    let app = setup_app().await;
    let user_id = create(&app, "/user", user_body("Anakin", "anakin@tatooine.net")).await;

    let response = patch(
        &app,
        &format!("/user/{user_id}"),
        json!({ "last_name": "Vader", "is_active": false }),
    )
    .await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["first_name"], "Anakin");
    assert_eq!(body["last_name"], "Vader");
    assert_eq!(body["full_name"], "Anakin Vader");
    assert_eq!(body["email"], "anakin@tatooine.net");
    assert_eq!(body["is_active"], false);
}

#[tokio::test]
async fn empty_patch_returns_current_user() {
    let app = setup_app().await;
    let user_id = create(&app, "/user", user_body("Owen", "owen@tatooine.net")).await;

    let response = patch(&app, &format!("/user/{user_id}"), json!({})).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json()["first_name"], "Owen");
}

#[tokio::test]
async fn delete_missing_user_is_exact_not_found() {
    let app = setup_app().await;

    let response = delete(&app, "/user/999").await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json(), json!({ "info": "Not Found" }));

    let response = patch(&app, "/user/999", json!({ "first_name": "Nobody" })).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
    assert_eq!(response.json(), json!({ "info": "Not Found" }));
}

#[tokio::test]
async fn delete_user_then_get_is_not_found() {
    let app = setup_app().await;
    let user_id = create(&app, "/user", user_body("Biggs", "biggs@tatooine.net")).await;

    let response = delete(&app, &format!("/user/{user_id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "info": "User deleted" }));

    let response = get(&app, &format!("/user/{user_id}")).await;
    assert_eq!(response.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn duplicate_email_is_conflict() {
    let app = setup_app().await;
    create(&app, "/user", user_body("Han", "han@falcon.io")).await;

    let response = post(&app, "/user", user_body("Chewie", "han@falcon.io")).await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    let body = response.json();
    assert_eq!(body["success"], false);
    assert_eq!(body["error"]["code"], "RESOURCE_CONFLICT");
}

#[tokio::test]
async fn missing_field_is_bad_request() {
    let app = setup_app().await;

    let response = post(
        &app,
        "/user",
        json!({ "first_name": "Wedge", "last_name": "Antilles" }),
    )
    .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"]["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn deleting_user_with_favorites_is_conflict() {
    let app = setup_app().await;
    let user_id = create(&app, "/user", user_body("Jyn", "jyn@scarif.org")).await;
    let planet_id = create(&app, "/planets", planet_body("Scarif")).await;
    post(
        &app,
        &format!("/favorite/planet/{planet_id}"),
        json!({ "user_id": user_id }),
    )
    .await;

    let response = delete(&app, &format!("/user/{user_id}")).await;
    assert_eq!(response.status, StatusCode::CONFLICT);

    // 先取消收藏后可以删除
    delete(&app, &format!("/favorite/planet/{planet_id}")).await;
    let response = delete(&app, &format!("/user/{user_id}")).await;
    assert_eq!(response.status, StatusCode::OK);
}
