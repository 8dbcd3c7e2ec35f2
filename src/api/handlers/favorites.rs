//! # 收藏处理器
//!
//! 收藏与取消收藏都以目标（星球/人物）的主键定位。

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, Query, State};
use axum::response::Response;
use serde::Deserialize;

use super::json_body;
use crate::api::middleware::RequestId;
use crate::api::response;
use crate::api::serializers::{FavoritePersonResponse, FavoritePlanetResponse, FavoritesResponse};
use crate::api::server::AppState;
use crate::api::services::{CreateFavoriteRequest, FavoritesService};
use crate::{
    ldebug, linfo,
    logging::{LogComponent, LogStage},
};

/// 收藏列表查询参数
#[derive(Debug, Default, Deserialize)]
pub struct FavoritesQuery {
    /// 未提供时使用配置中的 `favorites.default_user_id`
    pub user_id: Option<i32>,
}

/// 列出用户收藏
pub async fn list_favorites(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Query(query): Query<FavoritesQuery>,
) -> Response {
    let user_id = query
        .user_id
        .unwrap_or(state.config.favorites.default_user_id);

    ldebug!(
        &request_id,
        LogStage::Request,
        LogComponent::Favorites,
        "list_favorites",
        &format!("查询用户 {user_id} 的收藏")
    );

    match FavoritesService::new(state.database.as_ref())
        .list_for_user(user_id)
        .await
    {
        Ok(favorites) => response::success(FavoritesResponse::from(favorites)),
        Err(err) => response::app_error(err),
    }
}

/// 收藏星球
pub async fn add_favorite_planet(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(planet_id): Path<i32>,
    payload: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match FavoritesService::new(state.database.as_ref())
        .add_planet(planet_id, &request)
        .await
    {
        Ok(row) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::Favorites,
                "add_favorite_planet",
                &format!("用户 {} 收藏星球 {planet_id}", request.user_id)
            );
            response::created(FavoritePlanetResponse::from(row))
        }
        Err(err) => response::app_error(err),
    }
}

/// 取消收藏星球
pub async fn remove_favorite_planet(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(planet_id): Path<i32>,
) -> Response {
    match FavoritesService::new(state.database.as_ref())
        .remove_planet(planet_id)
        .await
    {
        Ok(()) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::Favorites,
                "remove_favorite_planet",
                &format!("取消收藏星球 {planet_id}")
            );
            response::info("Favorite planet deleted")
        }
        Err(err) => response::app_error(err),
    }
}

/// 收藏人物
pub async fn add_favorite_person(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(people_id): Path<i32>,
    payload: Result<Json<CreateFavoriteRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match FavoritesService::new(state.database.as_ref())
        .add_person(people_id, &request)
        .await
    {
        Ok(row) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::Favorites,
                "add_favorite_person",
                &format!("用户 {} 收藏人物 {people_id}", request.user_id)
            );
            response::created(FavoritePersonResponse::from(row))
        }
        Err(err) => response::app_error(err),
    }
}

/// 取消收藏人物
pub async fn remove_favorite_person(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(people_id): Path<i32>,
) -> Response {
    match FavoritesService::new(state.database.as_ref())
        .remove_person(people_id)
        .await
    {
        Ok(()) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::Favorites,
                "remove_favorite_person",
                &format!("取消收藏人物 {people_id}")
            );
            response::info("Favorite person deleted")
        }
        Err(err) => response::app_error(err),
    }
}
