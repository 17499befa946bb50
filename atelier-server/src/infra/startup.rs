use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{info, warn};

use atelier_core::{crypto::PasswordCrypto, database::SqliteDatabase};

use crate::infra::{app_state::AppState, config::Config};
use crate::routes;

/// Connect to the configured database and bring its schema up to date.
pub async fn connect_database(config: &Config) -> anyhow::Result<SqliteDatabase> {
    let db = SqliteDatabase::connect(&config.database.url)
        .await
        .with_context(|| format!("failed to open database {}", config.database.url))?;
    db.migrate().await.context("failed to apply migrations")?;
    Ok(db)
}

pub fn build_state(db: &SqliteDatabase, config: Config) -> anyhow::Result<AppState> {
    if config.auth.is_default_pepper() {
        warn!("ATELIER_PASSWORD_PEPPER is not set; using the development default");
    }
    if config.auth.admin_users.is_empty() {
        info!("no admin users configured; ownership admin endpoints are unreachable");
    }

    let crypto = PasswordCrypto::new(&config.auth.password_pepper)
        .context("failed to initialise password hashing")?;
    Ok(AppState::new(db, config, crypto))
}

/// Run the HTTP server until Ctrl-C.
pub async fn serve(config: Config) -> anyhow::Result<()> {
    let addr = config.server.bind_addr()?;
    let db = connect_database(&config).await?;
    let state = build_state(&db, config)?;
    let app = routes::build_app(state);

    let listener = TcpListener::bind(addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "atelier listening");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    info!("server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        warn!(error = %err, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutdown signal received");
}
