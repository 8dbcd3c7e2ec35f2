//! # 配置管理模块
//!
//! 处理应用配置加载、环境变量覆盖和验证

mod app_config;
mod database;

pub use app_config::{AppConfig, FavoritesConfig, ServerConfig};
pub use database::DatabaseConfig;

use crate::error::{ApiError, Result};
use crate::{
    linfo,
    logging::{LogComponent, LogStage},
};
use std::env;
use std::path::{Path, PathBuf};

/// 显式指定配置文件路径的环境变量
pub const CONFIG_PATH_ENV: &str = "STARWARS_API_CONFIG_PATH";

/// 从进程环境加载配置
pub fn load_config() -> Result<AppConfig> {
    load_config_with(|key| env::var(key).ok())
}

/// 使用自定义的环境变量查找函数加载配置
///
/// 1. `STARWARS_API_CONFIG_PATH` 指定的文件（必须存在）
/// 2. 否则 `config/config.{RUST_ENV}.toml`（存在时读取）
/// 3. 否则内置默认值
///
/// 之后依次应用环境变量覆盖与有效性校验。
pub fn load_config_with<F>(lookup: F) -> Result<AppConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let mut config = match lookup(CONFIG_PATH_ENV) {
        Some(path) => load_config_file(Path::new(&path))?,
        None => {
            let env_name = lookup("RUST_ENV").unwrap_or_else(|| "dev".to_string());
            let path = PathBuf::from(format!("config/config.{env_name}.toml"));
            if path.exists() {
                load_config_file(&path)?
            } else {
                linfo!(
                    "system",
                    LogStage::Startup,
                    LogComponent::Config,
                    "config_defaults",
                    &format!("配置文件 {} 不存在，使用默认配置", path.display())
                );
                AppConfig::default()
            }
        }
    };

    config.apply_env_overrides(&lookup)?;
    config.validate()?;
    Ok(config)
}

/// 读取并解析 TOML 配置文件
pub fn load_config_file(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Err(ApiError::config(format!(
            "配置文件不存在: {}",
            path.display()
        )));
    }

    let content = std::fs::read_to_string(path).map_err(|e| {
        ApiError::config_with_source(format!("读取配置文件失败: {}", path.display()), e)
    })?;

    let config: AppConfig = toml::from_str(&content)?;

    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::Config,
        "config_loaded",
        &format!("已加载配置文件: {}", path.display())
    );
    Ok(config)
}
