//! # HTTP API 模块
//!
//! 路由、处理器、服务层与响应序列化

pub mod handlers;
pub mod middleware;
pub mod response;
pub mod routes;
pub mod serializers;
pub mod server;
pub mod services;
pub mod sitemap;

pub use routes::create_routes;
pub use server::{ApiServer, AppState, build_router};
