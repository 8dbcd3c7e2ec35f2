//! # 星球处理器

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Extension, Path, State};
use axum::response::Response;

use super::json_body;
use crate::api::middleware::RequestId;
use crate::api::response;
use crate::api::serializers::PlanetResponse;
use crate::api::server::AppState;
use crate::api::services::{CreatePlanetRequest, PlanetsService, UpdatePlanetRequest};
use crate::{
    linfo,
    logging::{LogComponent, LogStage},
};

pub async fn list_planets(State(state): State<AppState>) -> Response {
    match PlanetsService::new(state.database.as_ref()).list().await {
        Ok(planets) => response::success(
            planets
                .into_iter()
                .map(PlanetResponse::from)
                .collect::<Vec<_>>(),
        ),
        Err(err) => response::app_error(err),
    }
}

pub async fn get_planet(State(state): State<AppState>, Path(id): Path<i32>) -> Response {
    match PlanetsService::new(state.database.as_ref()).get(id).await {
        Ok(planet) => response::success(PlanetResponse::from(planet)),
        Err(err) => response::app_error(err),
    }
}

pub async fn create_planet(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    payload: Result<Json<CreatePlanetRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match PlanetsService::new(state.database.as_ref())
        .create(&request)
        .await
    {
        Ok(planet) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::Planets,
                "create_planet",
                &format!("星球创建成功: id={} name={}", planet.id, planet.name)
            );
            response::created(PlanetResponse::from(planet))
        }
        Err(err) => response::app_error(err),
    }
}

pub async fn update_planet(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<i32>,
    payload: Result<Json<UpdatePlanetRequest>, JsonRejection>,
) -> Response {
    let request = match json_body(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    match PlanetsService::new(state.database.as_ref())
        .update(id, &request)
        .await
    {
        Ok(planet) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::Planets,
                "update_planet",
                &format!("星球更新成功: id={id}")
            );
            response::success(PlanetResponse::from(planet))
        }
        Err(err) => response::app_error(err),
    }
}

pub async fn delete_planet(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    Path(id): Path<i32>,
) -> Response {
    match PlanetsService::new(state.database.as_ref()).delete(id).await {
        Ok(()) => {
            linfo!(
                &request_id,
                LogStage::Db,
                LogComponent::Planets,
                "delete_planet",
                &format!("星球删除成功: id={id}")
            );
            response::info("Planet deleted")
        }
        Err(err) => response::app_error(err),
    }
}
