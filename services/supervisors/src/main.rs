use std::sync::Arc;

use anyhow::Context as _;
use sea_orm::Database;
use tracing::info;

use internship_core::tracing::init_tracing;
use internship_supervisors::config::SupervisorsConfig;
use internship_supervisors::router::build_router;
use internship_supervisors::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = SupervisorsConfig::from_env()?;
    init_tracing(config.log_format);

    let db = Database::connect(&config.database_url)
        .await
        .context("failed to connect to database")?;

    let router = build_router(AppState { db: Arc::new(db) });
    let addr = format!("0.0.0.0:{}", config.supervisors_port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("supervisors service listening on {addr}");
    axum::serve(listener, router).await.context("server error")?;
    Ok(())
}
