//! Server entry point: reads config, opens and migrates the store, optionally seeds it, then serves.

use pizza_api::{app, apply_migrations, connect, seed_if_empty, AppConfig, AppState};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = AppConfig::from_env()?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("pizza_api=info,tower_http=info")),
        )
        .init();

    let pool = connect(&config).await?;
    apply_migrations(&pool).await?;
    if config.seed {
        seed_if_empty(&pool).await?;
    }

    let app = app(AppState::new(pool.clone()), config.body_limit);
    let listener = TcpListener::bind(config.listen_addr()?).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    pool.close().await;
    tracing::info!("shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for ctrl-c");
    }
}
