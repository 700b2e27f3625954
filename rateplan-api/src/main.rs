use std::net::SocketAddr;

use anyhow::Context;
use rateplan_api::{app, telemetry, AppState};
use rateplan_store::Config;

fn main() -> anyhow::Result<()> {
    let config = Config::load().context("Failed to load config")?;
    telemetry::init(&config.log)?;

    let workers = config.server.worker_threads();
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .worker_threads(workers)
        .enable_all()
        .build()
        .context("Failed to build runtime")?;

    tracing::info!(workers, "Starting rateplan API on port {}", config.server.port);
    runtime.block_on(serve(config))
}

async fn serve(config: Config) -> anyhow::Result<()> {
    let state = AppState::from_config(&config).context("Failed to seed feeds")?;
    let app = app(state);

    let addr = SocketAddr::from(([0, 0, 0, 0], config.server.port));
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("Server error")?;

    tracing::info!("Shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }
}
