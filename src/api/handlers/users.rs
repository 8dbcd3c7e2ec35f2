//! # 用户处理器

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::response::Response;

use super::json_body;
use crate::api::middleware::RequestId;
use crate::api::response;
use crate::api::serializers::{UserDetailResponse, UserResponse};
use crate::api::server::AppState;
use crate::api::services::{CreateUserRequest, FavoritesService, UpdateUserRequest, UsersService};
use crate::{
    linfo,
    logging::{LogComponent, LogStage},
};

/// 列出用户
pub async fn list_users(State(state): State<AppState>) -> Response {
    match UsersService::new(state.database.as_ref()).list().await {
        Ok(users) => response::success(
            users
                .into_iter()
                .map(UserResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => response::app_error(err),
    }
}

/// 获取用户详情，附带其收藏列表
pub async fn get_user(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    let db = state.database.as_ref();

    let user = match UsersService::new(db).get(id).await {
        Ok(user) => user,
        Err(err) => return response::app_error(err),
    };

    match FavoritesService::new(db).list_for_user(user.id).await {
        Ok(favorites) => response::success(UserDetailResponse::new(user, favorites)),
        Err(err) => response::app_error(err),
    }
}

/// 创建用户
pub async fn create_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<CreateUserRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match UsersService::new(state.database.as_ref())
        .create(&request)
        .await
    {
        Ok(user) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::Users,
                "create_user",
                &format!("用户创建成功: id={}", user.id)
            );
            response::created(UserResponse::from(user))
        }
        Err(err) => response::app_error(err),
    }
}

/// 更新用户
pub async fn update_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdateUserRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match UsersService::new(state.database.as_ref())
        .update(id, &request)
        .await
    {
        Ok(user) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::Users,
                "update_user",
                &format!("用户更新成功: id={id}")
            );
            response::success(UserResponse::from(user))
        }
        Err(err) => response::app_error(err),
    }
}

/// 删除用户
pub async fn delete_user(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<i32>,
) -> Response {
    match UsersService::new(state.database.as_ref()).delete(id).await {
        Ok(()) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::Users,
                "delete_user",
                &format!("用户删除成功: id={id}")
            );
            response::info("User deleted")
        }
        Err(err) => response::app_error(err),
    }
}
