//! # API 响应结构
//!
//! 成功时直接返回资源 JSON；未找到统一为 `{"info":"Not Found"}`；
//! 其余失败使用标准错误结构。

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::error::{ApiError, ErrorCategory};
use crate::{
    lerror,
    logging::{LogComponent, LogStage},
};

/// 未找到时的固定响应信息
pub const NOT_FOUND_INFO: &str = "Not Found";

/// # 标准错误信息
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorInfo {
    pub code: String,
    pub message: String,
}

/// # 标准错误响应
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: ErrorInfo,
    pub timestamp: DateTime<Utc>,
}

/// # API响应枚举
///
/// 统一所有API出口，方便转换为 `axum::response::Response`
#[derive(Debug)]
pub enum ApiResponse<T: Serialize> {
    Ok(T),
    Created(T),
    Info(String),
    Error(StatusCode, String, String),
    AppError(ApiError),
}

impl<T: Serialize> IntoResponse for ApiResponse<T> {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(data) => (StatusCode::OK, Json(data)).into_response(),
            Self::Created(data) => (StatusCode::CREATED, Json(data)).into_response(),
            Self::Info(info) => (StatusCode::OK, Json(json!({ "info": info }))).into_response(),
            Self::Error(status, code, message) => {
                let error_response = ErrorResponse {
                    success: false,
                    error: ErrorInfo { code, message },
                    timestamp: Utc::now(),
                };
                (status, Json(error_response)).into_response()
            }
            Self::AppError(error) => error.into_response(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.is_not_found() {
            return not_found();
        }

        let (status, code) = self.to_http_response_parts();
        if self.category() == ErrorCategory::Server {
            lerror!(
                "system",
                LogStage::Response,
                LogComponent::Main,
                "server_error",
                &format!("请求处理失败: {self:?}")
            );
        }

        ApiResponse::<()>::Error(status, code.to_string(), self.to_string()).into_response()
    }
}

/// # 便捷函数：200 成功响应
pub fn success<T: Serialize>(data: T) -> Response {
    ApiResponse::Ok(data).into_response()
}

/// # 便捷函数：201 创建成功响应
pub fn created<T: Serialize>(data: T) -> Response {
    ApiResponse::Created(data).into_response()
}

/// # 便捷函数：`{"info": ...}` 响应
pub fn info(message: &str) -> Response {
    ApiResponse::<()>::Info(message.to_string()).into_response()
}

/// # 便捷函数：404 响应
pub fn not_found() -> Response {
    (StatusCode::NOT_FOUND, Json(json!({ "info": NOT_FOUND_INFO }))).into_response()
}

/// # 便捷函数：应用错误响应
pub fn app_error(error: ApiError) -> Response {
    ApiResponse::<()>::AppError(error).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Context;
    use axum::body::to_bytes;
    use serde_json::Value;

    async fn body_json(response: Response) -> Value {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    #[tokio::test]
    async fn not_found_body_is_exact() {
        let response = app_error(ApiError::not_found("user", "42"));
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "info": "Not Found" }));
    }

    #[tokio::test]
    async fn wrapped_not_found_keeps_exact_body() {
        let error = Err::<(), _>(ApiError::not_found("planet", "5"))
            .context("Failed to fetch planet")
            .unwrap_err();
        let response = app_error(error);
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        assert_eq!(body_json(response).await, json!({ "info": "Not Found" }));
    }

    #[tokio::test]
    async fn conflict_uses_error_envelope() {
        let response = app_error(ApiError::conflict_with_source(
            "唯一约束冲突: people.name",
            anyhow::anyhow!("UNIQUE constraint failed: people.name"),
        ));
        assert_eq!(response.status(), StatusCode::CONFLICT);

        let body = body_json(response).await;
        assert_eq!(body["success"], false);
        assert_eq!(body["error"]["code"], "RESOURCE_CONFLICT");
        assert!(body["timestamp"].is_string());
    }

    #[tokio::test]
    async fn created_and_info_statuses() {
        let response = created(json!({ "id": 1 }));
        assert_eq!(response.status(), StatusCode::CREATED);

        let response = info("User deleted");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(body_json(response).await, json!({ "info": "User deleted" }));
    }
}
