//! # 路由配置
//!
//! 定义所有API路由。每条路由都经由 [`RouteRegistry`] 注册，站点地图随之生成。

use axum::{Extension, Router};
use std::sync::Arc;

use super::handlers::{favorites, people, planets, system, users};
use super::server::AppState;
use super::sitemap::{HttpMethod, RouteEntry, RouteRegistry, Sitemap};

/// 创建所有路由
pub fn create_routes(state: AppState) -> Router {
    let (router, entries) = route_registry().into_parts();
    let sitemap = Arc::new(Sitemap::new(entries));

    router
        .fallback(system::fallback_handler)
        .layer(Extension(sitemap))
        .with_state(state)
}

/// 已注册路由的清单
#[must_use]
pub fn route_entries() -> Vec<RouteEntry> {
    route_registry().into_parts().1
}

fn route_registry() -> RouteRegistry<AppState> {
    let registry = RouteRegistry::new()
        .route(HttpMethod::Get, "/", system::sitemap_handler)
        .route(HttpMethod::Get, "/ping", system::ping_handler);

    let registry = user_routes(registry);
    let registry = people_routes(registry);
    let registry = planet_routes(registry);
    favorite_routes(registry)
}

/// 用户路由
fn user_routes(registry: RouteRegistry<AppState>) -> RouteRegistry<AppState> {
    registry
        .route(HttpMethod::Get, "/user", users::list_users)
        .route(HttpMethod::Get, "/user/", users::list_users)
        .route(HttpMethod::Post, "/user", users::create_user)
        .route(HttpMethod::Get, "/user/{id}", users::get_user)
        .route(HttpMethod::Patch, "/user/{id}", users::update_user)
        .route(HttpMethod::Delete, "/user/{id}", users::delete_user)
}

/// 人物路由
fn people_routes(registry: RouteRegistry<AppState>) -> RouteRegistry<AppState> {
    registry
        .route(HttpMethod::Get, "/people", people::list_people)
        .route(HttpMethod::Post, "/people", people::create_person)
        .route(HttpMethod::Get, "/people/{id}", people::get_person)
        .route(HttpMethod::Patch, "/people/{id}", people::update_person)
        .route(HttpMethod::Delete, "/people/{id}", people::delete_person)
}

/// 星球路由
fn planet_routes(registry: RouteRegistry<AppState>) -> RouteRegistry<AppState> {
    registry
        .route(HttpMethod::Get, "/planets", planets::list_planets)
        .route(HttpMethod::Post, "/planets", planets::create_planet)
        .route(HttpMethod::Get, "/planets/{id}", planets::get_planet)
        .route(HttpMethod::Patch, "/planets/{id}", planets::update_planet)
        .route(HttpMethod::Delete, "/planets/{id}", planets::delete_planet)
}

/// 收藏路由
fn favorite_routes(registry: RouteRegistry<AppState>) -> RouteRegistry<AppState> {
    registry
        .route(
            HttpMethod::Get,
            "/users/favorites",
            favorites::list_favorites,
        )
        .route(
            HttpMethod::Post,
            "/favorite/planet/{planet_id}",
            favorites::add_favorite_planet,
        )
        .route(
            HttpMethod::Delete,
            "/favorite/planet/{planet_id}",
            favorites::remove_favorite_planet,
        )
        .route(
            HttpMethod::Post,
            "/favorite/people/{people_id}",
            favorites::add_favorite_person,
        )
        .route(
            HttpMethod::Delete,
            "/favorite/people/{people_id}",
            favorites::remove_favorite_person,
        )
}
