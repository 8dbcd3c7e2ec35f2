//! # 数据库配置

use crate::error::{ApiError, Result};
use crate::{
    linfo,
    logging::{LogComponent, LogStage},
};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// 数据库URL
    pub url: String,
    /// 最大连接数
    pub max_connections: u32,
    /// 连接超时时间（秒）
    pub connect_timeout: u64,
    /// 启动时是否自动执行迁移
    pub auto_migrate: bool,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite://./data/starwars.db".to_string(),
            max_connections: 10,
            connect_timeout: 30,
            auto_migrate: true,
        }
    }
}

impl DatabaseConfig {
    /// SQLite 文件数据库的文件路径，内存库和其它数据库返回 `None`
    #[must_use]
    pub fn sqlite_file_path(&self) -> Option<&Path> {
        if !self.is_sqlite() || self.is_memory_database() {
            return None;
        }
        let rest = self
            .url
            .strip_prefix("sqlite://")
            .or_else(|| self.url.strip_prefix("sqlite:"))?;
        let path = rest.split('?').next().unwrap_or(rest);
        (!path.is_empty()).then(|| Path::new(path))
    }

    /// 确保数据库路径存在（仅对SQLite文件数据库）
    pub fn ensure_database_path(&self) -> Result<()> {
        let Some(db_path) = self.sqlite_file_path() else {
            return Ok(());
        };

        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| {
                    ApiError::config_with_source(
                        format!("无法创建数据库目录: {}", parent.display()),
                        e,
                    )
                })?;

                linfo!(
                    "system",
                    LogStage::Startup,
                    LogComponent::Database,
                    "create_db_dir",
                    &format!("创建数据库目录: {}", parent.display())
                );
            }
        }

        // sqlx 默认不会创建缺失的 SQLite 文件
        if !db_path.exists() {
            std::fs::File::create(db_path).map_err(|e| {
                ApiError::config_with_source(
                    format!("无法创建数据库文件: {}", db_path.display()),
                    e,
                )
            })?;
            linfo!(
                "system",
                LogStage::Startup,
                LogComponent::Database,
                "create_db_file",
                &format!("数据库文件创建成功: {}", db_path.display())
            );
        }

        Ok(())
    }

    /// 获取准备好的数据库连接字符串
    pub fn get_connection_url(&self) -> Result<String> {
        self.ensure_database_path()?;
        Ok(self.url.clone())
    }

    /// 检查是否为内存数据库
    #[must_use]
    pub fn is_memory_database(&self) -> bool {
        self.url.contains(":memory:") || self.url.contains("mode=memory")
    }

    /// 检查是否为SQLite数据库
    #[must_use]
    pub fn is_sqlite(&self) -> bool {
        self.url.starts_with("sqlite:")
    }

    /// 隐去连接串中的密码，用于日志输出
    #[must_use]
    pub fn masked_url(&self) -> String {
        let Some(scheme_end) = self.url.find("://").map(|i| i + 3) else {
            return self.url.clone();
        };
        match self.url.rfind('@') {
            Some(at) if at > scheme_end => {
                let credentials = &self.url[scheme_end..at];
                match credentials.split_once(':') {
                    Some((user, _)) => format!(
                        "{}{user}:***{}",
                        &self.url[..scheme_end],
                        &self.url[at..]
                    ),
                    None => self.url.clone(),
                }
            }
            _ => self.url.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_url(url: &str) -> DatabaseConfig {
        DatabaseConfig {
            url: url.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn sqlite_file_path_strips_scheme_and_query() {
        let config = with_url("sqlite://./data/starwars.db?mode=rwc");
        assert_eq!(config.sqlite_file_path(), Some(Path::new("./data/starwars.db")));

        let config = with_url("sqlite:/tmp/test.db");
        assert_eq!(config.sqlite_file_path(), Some(Path::new("/tmp/test.db")));
    }

    #[test]
    fn memory_and_postgres_have_no_file() {
        assert!(with_url("sqlite::memory:").sqlite_file_path().is_none());
        assert!(with_url("postgres://localhost/swapi").sqlite_file_path().is_none());
    }

    #[test]
    fn ensure_database_path_creates_file() {
        let dir = tempfile::tempdir().unwrap();
        let db_file = dir.path().join("nested").join("starwars.db");
        let config = with_url(&format!("sqlite://{}", db_file.display()));

        config.ensure_database_path().unwrap();
        assert!(db_file.exists());
        // 再次调用不报错
        config.ensure_database_path().unwrap();
    }

    #[test]
    fn masked_url_hides_password() {
        let config = with_url("postgres://rebel:secret@db:5432/swapi");
        assert_eq!(config.masked_url(), "postgres://rebel:***@db:5432/swapi");
        assert_eq!(
            with_url("sqlite://./data/starwars.db").masked_url(),
            "sqlite://./data/starwars.db"
        );
    }
}
