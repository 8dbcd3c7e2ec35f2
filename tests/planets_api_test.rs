//! 星球接口集成测试

mod common;

use axum::http::StatusCode;
use common::*;
use pretty_assertions::assert_eq;
use serde_json::json;

#[tokio::test]
async fn patch_population_keeps_other_fields() {
    let app = setup_app().await;
    let id = create(&app, "/planets", planet_body("Tatooine")).await;
    let before = get(&app, &format!("/planets/{id}")).await.json();

    let response = patch(&app, &format!("/planets/{id}"), json!({ "population": 1000 })).await;
    assert_eq!(response.status, StatusCode::OK);

    let mut expected = before;
    expected["population"] = json!(1000);
    assert_eq!(response.json(), expected);
    assert_eq!(get(&app, &format!("/planets/{id}")).await.json(), expected);
}

#[tokio::test]
async fn missing_planet_is_not_found() {
    let app = setup_app().await;

    for response in [
        get(&app, "/planets/42").await,
        patch(&app, "/planets/42", json!({ "climate": "frozen" })).await,
        delete(&app, "/planets/42").await,
    ] {
        assert_eq!(response.status, StatusCode::NOT_FOUND);
        assert_eq!(response.json(), json!({ "info": "Not Found" }));
    }
}

#[tokio::test]
async fn delete_planet() {
    let app = setup_app().await;
    let id = create(&app, "/planets", planet_body("Hoth")).await;

    let response = delete(&app, &format!("/planets/{id}")).await;
    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.json(), json!({ "info": "Planet deleted" }));
    assert_eq!(get(&app, "/planets").await.json(), json!([]));
}

#[tokio::test]
async fn rename_to_existing_name_is_conflict() {
    let app = setup_app().await;
    create(&app, "/planets", planet_body("Naboo")).await;
    let id = create(&app, "/planets", planet_body("Dagobah")).await;

    let response = patch(&app, &format!("/planets/{id}"), json!({ "name": "Naboo" })).await;
    assert_eq!(response.status, StatusCode::CONFLICT);
}
