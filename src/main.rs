//! # Star Wars API 主程序

use starwars_api::{
    ApiServer, AppState, Result, config, database, lerror, linfo,
    logging::{self, LogComponent, LogStage},
};

#[tokio::main]
async fn main() {
    logging::init_logging(None);

    if let Err(e) = run().await {
        lerror!(
            "system",
            LogStage::Startup,
            LogComponent::Main,
            "service_start_failed",
            &format!("服务启动失败: {e:?}")
        );
        std::process::exit(1);
    }

    linfo!(
        "system",
        LogStage::Shutdown,
        LogComponent::Main,
        "service_shutdown",
        "服务正常关闭"
    );
}

async fn run() -> Result<()> {
    let config = config::load_config()?;

    let db = database::init_database(&config.database).await?;
    if config.database.auto_migrate {
        database::run_migrations(&db).await?;
    }
    database::check_database_status(&db).await?;

    linfo!(
        "system",
        LogStage::Startup,
        LogComponent::Main,
        "service_starting",
        "服务启动"
    );
    ApiServer::new(AppState::new(db, config)).serve().await
}
