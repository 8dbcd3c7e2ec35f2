//! # HTTP 服务器
//!
//! Axum HTTP 服务器：路由、CORS、访问追踪、请求ID以及优雅停机。

use crate::config::{AppConfig, ServerConfig};
use crate::error::{ApiError, Result};
use crate::{
    linfo, lwarn,
    logging::{LogComponent, LogStage},
};
use axum::Router;
use axum::http::{HeaderValue, Method, header};
use sea_orm::DatabaseConnection;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::signal;
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use super::middleware::request_id_middleware;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub database: Arc<DatabaseConnection>,
    pub config: Arc<AppConfig>,
}

impl AppState {
    #[must_use]
    pub fn new(database: DatabaseConnection, config: AppConfig) -> Self {
        Self {
            database: Arc::new(database),
            config: Arc::new(config),
        }
    }
}

/// API 服务器
pub struct ApiServer {
    config: ServerConfig,
    router: Router,
}

impl ApiServer {
    /// 创建新的服务器
    #[must_use]
    pub fn new(state: AppState) -> Self {
        let config = state.config.server.clone();
        let router = build_router(state);
        Self { config, router }
    }

    /// 监听地址
    pub fn bind_address(&self) -> Result<SocketAddr> {
        let address = format!("{}:{}", self.config.bind_address, self.config.port);
        address.parse().map_err(|e| {
            ApiError::config_with_source(format!("无效的监听地址: {address}"), e)
        })
    }

    /// 启动服务器，收到 Ctrl+C 或 SIGTERM 后优雅停机
    pub async fn serve(self) -> Result<()> {
        let addr = self.bind_address()?;
        let listener = TcpListener::bind(addr)
            .await
            .map_err(|e| ApiError::server_start_with_source(format!("无法绑定 {addr}"), e))?;

        linfo!(
            "system",
            LogStage::Startup,
            LogComponent::ServerSetup,
            "listening",
            &format!("HTTP 服务已启动: http://{addr}")
        );

        axum::serve(listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await
            .map_err(|e| ApiError::server_start_with_source("HTTP 服务异常退出", e))?;

        linfo!(
            "system",
            LogStage::Shutdown,
            LogComponent::ServerSetup,
            "stopped",
            "HTTP 服务已停止"
        );
        Ok(())
    }
}

/// 组装完整的路由器与中间件
pub fn build_router(state: AppState) -> Router {
    let server_config = state.config.server.clone();
    let mut app = super::routes::create_routes(state);

    if server_config.enable_cors {
        app = app.layer(cors_layer(&server_config));
    }

    app.layer(
        ServiceBuilder::new()
            .layer(axum::middleware::from_fn(request_id_middleware))
            .layer(TraceLayer::new_for_http()),
    )
}

fn cors_layer(config: &ServerConfig) -> CorsLayer {
    let cors = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PATCH,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([header::CONTENT_TYPE, header::ACCEPT, header::ORIGIN]);

    if config.cors_origins.iter().any(|origin| origin == "*") {
        return cors.allow_origin(Any);
    }

    let origins = config
        .cors_origins
        .iter()
        .map(|origin| origin.parse::<HeaderValue>())
        .collect::<std::result::Result<Vec<_>, _>>();

    match origins {
        Ok(origins) => cors.allow_origin(origins),
        Err(e) => {
            lwarn!(
                "system",
                LogStage::Startup,
                LogComponent::ServerSetup,
                "cors_config_fail",
                &format!("Invalid CORS origin configuration: {e}, falling back to allow any")
            );
            cors.allow_origin(Any)
        }
    }
}

/// 优雅停机信号
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            lwarn!(
                "system",
                LogStage::Shutdown,
                LogComponent::ServerSetup,
                "ctrl_c_handler_failed",
                &format!("无法监听 Ctrl+C: {e}")
            );
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                lwarn!(
                    "system",
                    LogStage::Shutdown,
                    LogComponent::ServerSetup,
                    "sigterm_handler_failed",
                    &format!("无法监听 SIGTERM: {e}")
                );
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {
            linfo!("system", LogStage::Shutdown, LogComponent::ServerSetup, "signal", "收到 Ctrl+C，开始优雅停机");
        }
        () = terminate => {
            linfo!("system", LogStage::Shutdown, LogComponent::ServerSetup, "signal", "收到 SIGTERM，开始优雅停机");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bind_address_combines_host_and_port() {
        let config = ServerConfig {
            bind_address: "127.0.0.1".to_string(),
            port: 8088,
            ..Default::default()
        };
        let server = ApiServer {
            config,
            router: Router::new(),
        };
        assert_eq!(
            server.bind_address().unwrap(),
            "127.0.0.1:8088".parse::<SocketAddr>().unwrap()
        );
    }
}
