//! Bookshelf - 图书记录 CRUD 服务

use std::sync::Arc;

use bookshelf::config::{load_config, print_config, LogConfig};
use bookshelf::infrastructure::http::{AppState, HttpServer, ServerConfig};
use bookshelf::infrastructure::persistence::sqlite::{
    create_pool, run_migrations, DatabaseConfig, SqliteBookRepository,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 加载配置（优先级：环境变量 > 配置文件 > 默认值）
    let config = load_config().map_err(|e| anyhow::anyhow!("Failed to load config: {}", e))?;

    init_tracing(&config.log);

    tracing::info!("Bookshelf - 图书记录服务 v{}", env!("CARGO_PKG_VERSION"));
    print_config(&config);

    // 确保数据目录存在
    if let Some(parent) = std::path::Path::new(&config.database.path).parent() {
        if !parent.as_os_str().is_empty() {
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    // 初始化数据库
    let db_config = DatabaseConfig {
        database_url: config.database.database_url(),
        max_connections: config.database.max_connections,
    };
    let pool = create_pool(&db_config).await?;
    run_migrations(&pool).await?;

    let book_repo = Arc::new(SqliteBookRepository::new(pool.clone()));

    let server_config = ServerConfig::new(&config.server.host, config.server.port);
    let state = AppState::new(book_repo, config.books.strict_patch);
    let server = HttpServer::new(server_config, state);

    server
        .run_with_shutdown(async {
            match tokio::signal::ctrl_c().await {
                Ok(()) => tracing::info!("Received shutdown signal"),
                Err(e) => {
                    tracing::error!(error = %e, "Failed to listen for ctrl-c");
                    std::future::pending::<()>().await;
                }
            }
        })
        .await?;

    pool.close().await;
    tracing::info!("Server shutdown complete");

    Ok(())
}

/// 初始化日志，RUST_LOG 优先于配置文件中的级别
fn init_tracing(log: &LogConfig) {
    let log_filter = format!("{},bookshelf={},tower_http=debug", log.level, log.level);
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&log_filter));

    if log.json {
        tracing_subscriber::fmt().json().with_env_filter(filter).init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}
