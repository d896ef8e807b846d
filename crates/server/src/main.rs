mod bootstrap;
mod health;
mod storefront;

use std::future::IntoFuture;
use std::time::Duration;

use anyhow::Result;
use fragrance_core::config::{AppConfig, LoadOptions};
use tracing::{error, info, warn};

fn init_logging(config: &AppConfig) {
    use fragrance_core::config::LogFormat::*;
    use tracing::Level;

    let log_level = config.logging.level.parse::<Level>().unwrap_or(Level::INFO);

    match config.logging.format {
        Compact => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).compact().init();
        }
        Pretty => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).pretty().init();
        }
        Json => {
            tracing_subscriber::fmt().with_target(false).with_max_level(log_level).json().init();
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    run().await
}

pub async fn run() -> Result<()> {
    // Logging depends on config, so config loads first.
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let app = bootstrap::bootstrap_with_config(config)?;
    let address = format!("{}:{}", app.config.server.bind_address, app.config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    info!(
        event_name = "system.server.started",
        correlation_id = "bootstrap",
        bind_address = %address,
        "fragrance-server listening"
    );

    let (drain_tx, drain_rx) = tokio::sync::oneshot::channel::<()>();
    let shutdown = async move {
        wait_for_shutdown().await;
        info!(
            event_name = "system.server.stopping",
            correlation_id = "shutdown",
            "fragrance-server draining connections"
        );
        let _ = drain_tx.send(());
    };

    let grace = Duration::from_secs(app.config.server.graceful_shutdown_secs);
    let serve = axum::serve(listener, bootstrap::app_router(app.state))
        .with_graceful_shutdown(shutdown)
        .into_future();

    tokio::select! {
        result = serve => result?,
        _ = async {
            if drain_rx.await.is_ok() {
                tokio::time::sleep(grace).await;
            } else {
                std::future::pending::<()>().await;
            }
        } => {
            warn!(
                event_name = "system.server.shutdown_timeout",
                correlation_id = "shutdown",
                grace_secs = grace.as_secs(),
                "graceful shutdown window elapsed; dropping open connections"
            );
        }
    }

    info!(
        event_name = "system.server.stopped",
        correlation_id = "shutdown",
        "fragrance-server stopped"
    );
    Ok(())
}

async fn wait_for_shutdown() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        error!(
            event_name = "system.server.signal_error",
            correlation_id = "shutdown",
            error = %error,
            "failed to listen for shutdown signal"
        );
        std::future::pending::<()>().await;
    }
}
