//! # 数据库模块
//!
//! 数据库连接和迁移管理

use crate::config::DatabaseConfig;
use crate::error::{ApiError, Context, Result};
use crate::{
    lerror, linfo, lwarn,
    logging::{LogComponent, LogStage},
};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::time::Duration;

/// 初始化数据库连接
pub async fn init_database(config: &DatabaseConfig) -> Result<DatabaseConnection> {
    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::Database,
        "connect",
        &format!("正在连接数据库: {}", config.masked_url())
    );

    let url = config.get_connection_url()?;

    // 每个 SQLite 内存连接都是独立的库，只能保留一个连接
    let max_connections = if config.is_memory_database() {
        1
    } else {
        config.max_connections
    };

    let mut options = ConnectOptions::new(url);
    options
        .max_connections(max_connections)
        .connect_timeout(Duration::from_secs(config.connect_timeout))
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .map_err(|e| ApiError::database_with_source("数据库连接失败", e))?;

    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::Database,
        "connected",
        "数据库连接成功"
    );
    Ok(db)
}

/// 运行数据库迁移
pub async fn run_migrations(db: &DatabaseConnection) -> Result<()> {
    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::Database,
        "migrate",
        "开始运行数据库迁移..."
    );

    match ::migration::Migrator::up(db, None).await {
        Ok(()) => {
            linfo!(
                "system",
                LogStage::Startup,
                LogComponent::Database,
                "migrate_done",
                "数据库迁移完成"
            );
            Ok(())
        }
        Err(e) => {
            lerror!(
                "system",
                LogStage::Startup,
                LogComponent::Database,
                "migrate_failed",
                &format!("数据库迁移失败: {e}")
            );
            Err(e).context("数据库迁移失败")
        }
    }
}

/// 检查数据库状态，返回待应用的迁移数量
pub async fn check_database_status(db: &DatabaseConnection) -> Result<usize> {
    let pending = ::migration::Migrator::get_pending_migrations(db)
        .await
        .context("查询迁移状态失败")?;

    if pending.is_empty() {
        linfo!(
            "system",
            LogStage::Startup,
            LogComponent::Database,
            "migration_status",
            "所有迁移都已应用"
        );
    } else {
        lwarn!(
            "system",
            LogStage::Startup,
            LogComponent::Database,
            "migration_status",
            &format!("有 {} 个待应用的迁移", pending.len())
        );
    }

    Ok(pending.len())
}
