//! 集成测试公共工具：内存 SQLite + 迁移 + oneshot 请求

#![allow(dead_code)]

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{HeaderMap, Request, StatusCode, header};
use sea_orm::DatabaseConnection;
use serde_json::{Value, json};
use starwars_api::config::{AppConfig, DatabaseConfig};
use starwars_api::{AppState, build_router, database};
use tower::ServiceExt;

pub fn test_config() -> AppConfig {
    AppConfig {
        database: DatabaseConfig {
            url: "sqlite::memory:".to_string(),
            ..Default::default()
        },
        ..Default::default()
    }
}

pub async fn setup_db() -> DatabaseConnection {
    let config = test_config();
    let db = database::init_database(&config.database)
        .await
        .expect("connect test db");
    database::run_migrations(&db).await.expect("run migrations");
    db
}

pub async fn setup_app() -> Router {
    let db = setup_db().await;
    build_router(AppState::new(db, test_config()))
}

pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub text: String,
}

impl TestResponse {
    pub fn json(&self) -> Value {
        serde_json::from_str(&self.text).expect("response body is json")
    }
}

pub async fn send_raw(app: &Router, request: Request<Body>) -> TestResponse {
    let response = app.clone().oneshot(request).await.expect("request handled");
    let status = response.status();
    let headers = response.headers().clone();
    let bytes = to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("read body");
    TestResponse {
        status,
        headers,
        text: String::from_utf8(bytes.to_vec()).expect("utf-8 body"),
    }
}

pub async fn send(app: &Router, method: &str, uri: &str, body: Option<Value>) -> TestResponse {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string())),
        None => builder.body(Body::empty()),
    }
    .expect("build request");
    send_raw(app, request).await
}

pub async fn get(app: &Router, uri: &str) -> TestResponse {
    send(app, "GET", uri, None).await
}

pub async fn post(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, "POST", uri, Some(body)).await
}

pub async fn patch(app: &Router, uri: &str, body: Value) -> TestResponse {
    send(app, "PATCH", uri, Some(body)).await
}

pub async fn delete(app: &Router, uri: &str) -> TestResponse {
    send(app, "DELETE", uri, None).await
}

pub fn user_body(first_name: &str, email: &str) -> Value {
    json!({
        "first_name": first_name,
        "last_name": "Skywalker",
        "email": email,
        "password": "use-the-force",
        "is_active": true
    })
}

pub fn luke_body() -> Value {
    json!({
        "name": "Luke",
        "gender": "male",
        "height": 172,
        "mass": 77,
        "hair_color": "blond",
        "skin_color": "fair",
        "eye_color": "blue",
        "birth_year": "19BBY"
    })
}

pub fn person_body(name: &str) -> Value {
    let mut body = luke_body();
    body["name"] = json!(name);
    body
}

pub fn planet_body(name: &str) -> Value {
    json!({
        "name": name,
        "diameter": 10465,
        "rotation_period": 23,
        "orbital_period": 304,
        "gravity": "1 standard",
        "population": 200000,
        "climate": "arid",
        "terrain": "desert",
        "surface_water": 1
    })
}

/// 创建资源并返回新 id
pub async fn create(app: &Router, uri: &str, body: Value) -> i64 {
    let response = post(app, uri, body).await;
    assert_eq!(response.status, StatusCode::CREATED, "{}", response.text);
    response.json()["id"].as_i64().expect("id in response")
}
