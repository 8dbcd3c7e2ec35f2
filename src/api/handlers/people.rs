//! # 人物处理器

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::response::Response;

use super::json_body;
use crate::api::middleware::RequestId;
use crate::api::response;
use crate::api::serializers::PersonResponse;
use crate::api::server::AppState;
use crate::api::services::{CreatePersonRequest, PeopleService, UpdatePersonRequest};
use crate::{
    linfo,
    logging::{LogComponent, LogStage},
};

pub async fn list_people(State(state): State<AppState>) -> Response {
    match PeopleService::new(state.database.as_ref()).list().await {
        Ok(people) => response::success(
            people
                .into_iter()
                .map(PersonResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => response::app_error(err),
    }
}

pub async fn get_person(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match PeopleService::new(state.database.as_ref()).get(id).await {
        Ok(person) => response::success(PersonResponse::from(person)),
        Err(err) => response::app_error(err),
    }
}

pub async fn create_person(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<CreatePersonRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match PeopleService::new(state.database.as_ref())
        .create(&request)
        .await
    {
        Ok(person) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::People,
                "create_person",
                &format!("人物创建成功: id={} name={}", person.id, person.name)
            );
            response::created(PersonResponse::from(person))
        }
        Err(err) => response::app_error(err),
    }
}

pub async fn update_person(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdatePersonRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match PeopleService::new(state.database.as_ref())
        .update(id, &request)
        .await
    {
        Ok(person) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::People,
                "update_person",
                &format!("人物更新成功: id={id}")
            );
            response::success(PersonResponse::from(person))
        }
        Err(err) => response::app_error(err),
    }
}

pub async fn delete_person(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<i32>,
) -> Response {
    match PeopleService::new(state.database.as_ref()).delete(id).await {
        Ok(()) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::People,
                "delete_person",
                &format!("人物删除成功: id={id}")
            );
            response::info("Person deleted")
        }
        Err(err) => response::app_error(err),
    }
}
