//! # 应用配置结构定义

use crate::ensure_config;
use crate::error::{ApiError, Result};
use serde::{Deserialize, Serialize};

use super::DatabaseConfig;

/// 应用主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// HTTP 服务配置
    pub server: ServerConfig,
    /// 数据库配置
    pub database: DatabaseConfig,
    /// 收藏列表配置
    pub favorites: FavoritesConfig,
}

/// HTTP 服务配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// 监听地址
    pub bind_address: String,
    /// 监听端口
    pub port: u16,
    /// 是否启用CORS
    pub enable_cors: bool,
    /// 允许的CORS源地址
    pub cors_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0".to_string(),
            port: 3000,
            enable_cors: true,
            cors_origins: vec!["*".to_string()],
        }
    }
}

/// 收藏列表配置
///
/// 没有登录体系，`GET /users/favorites` 在未传 `user_id` 时使用此处的用户。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FavoritesConfig {
    pub default_user_id: i32,
}

impl Default for FavoritesConfig {
    fn default() -> Self {
        Self { default_user_id: 1 }
    }
}

impl AppConfig {
    /// 应用环境变量覆盖：`DATABASE_URL`、`PORT`、`BIND_ADDRESS`
    pub fn apply_env_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup("DATABASE_URL").filter(|v| !v.trim().is_empty()) {
            self.database.url = url;
        }

        if let Some(port) = lookup("PORT") {
            self.server.port = port.trim().parse().map_err(|e| {
                ApiError::config_with_source(format!("无效的端口号 PORT={port}"), e)
            })?;
        }

        if let Some(address) = lookup("BIND_ADDRESS").filter(|v| !v.trim().is_empty()) {
            self.server.bind_address = address;
        }

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<()> {
        ensure_config!(self.server.port != 0, "无效的服务器端口: 0");
        ensure_config!(
            self.server.bind_address.parse::<std::net::IpAddr>().is_ok(),
            "无效的监听地址: {}",
            self.server.bind_address
        );
        ensure_config!(!self.database.url.is_empty(), "数据库URL不能为空");
        ensure_config!(
            self.database.max_connections > 0,
            "数据库最大连接数必须大于0"
        );
        ensure_config!(
            self.favorites.default_user_id > 0,
            "favorites.default_user_id 必须大于0"
        );
        Ok(())
    }
}
