use std::sync::Arc;

use gringotts_api::{
    config::config,
    database::{DatabaseManager, PgRepository},
    is_development,
    state::AppState,
};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present so cargo run picks up DATABASE_URL, SECURITY_*, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("gringotts_api=debug,tower_http=debug")),
        )
        .init();

    // Initialize configuration (this loads the config singleton)
    let config = config();
    tracing::info!("Starting Gringotts API in {:?} mode", config.environment);

    if config.security.jwt_signing_key.is_empty() {
        tracing::warn!("SECURITY_JWT_SIGNING_KEY is not set; login and protected routes will fail");
    }
    if is_development!() && config.security.password_salt.is_empty() {
        tracing::warn!("SECURITY_PASSWORD_SALT is not set; stored hashes will use an empty salt");
    }

    let pool = DatabaseManager::connect_lazy(&config.database)?;
    let state = AppState::new(config.clone(), Arc::new(PgRepository::new(pool)));
    let app = gringotts_api::app::router(state);

    let bind_addr = format!("0.0.0.0:{}", config.api.port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .map_err(|e| anyhow::anyhow!("failed to bind {}: {}", bind_addr, e))?;

    tracing::info!("Gringotts API listening on http://{}", bind_addr);

    axum::serve(listener, app).await?;
    Ok(())
}
