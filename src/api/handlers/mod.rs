//! # HTTP 处理器
//!
//! 每个处理器解析路径与请求体，调用一次 service，再序列化结果。

pub mod favorites;
pub mod people;
pub mod planets;
pub mod system;
pub mod users;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::response::Response;

use super::response;
use crate::error::ApiError;

/// 取出 JSON 请求体，缺字段或格式错误时转为 400 响应
pub(crate) fn json_body<T>(
    payload: std::result::Result<Json<T>, JsonRejection>,
) -> std::result::Result<T, Response> {
    payload
        .map(|Json(body)| body)
        .map_err(|rejection| response::app_error(ApiError::from(rejection)))
}
