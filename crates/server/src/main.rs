mod health;
mod invocations;

use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use beacon_agent::openai::OpenAiBackend;
use beacon_agent::runtime::AssistantRuntime;
use beacon_core::config::{AppConfig, LoadOptions};

fn init_logging(config: &AppConfig) {
    use beacon_core::config::LogFormat::*;
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
    // Load config and initialize logging before any other operations
    let config = AppConfig::load(LoadOptions::default())?;
    init_logging(&config);

    let backend = Arc::new(OpenAiBackend::new(&config.llm)?);
    let runtime = Arc::new(AssistantRuntime::new(backend));
    let app = invocations::router(runtime).merge(health::router(&config));

    let address = format!("{}:{}", config.server.bind_address, config.server.port);
    let listener = tokio::net::TcpListener::bind(&address).await?;

    tracing::info!(
        event_name = "system.server.started",
        bind_address = %address,
        model = %config.llm.model,
        "beacon server started"
    );

    // Serve on a task so the drain after a shutdown signal can be bounded
    // by server.graceful_shutdown_secs.
    let shutdown = Arc::new(tokio::sync::Notify::new());
    let server_shutdown = shutdown.clone();
    let server = tokio::spawn(async move {
        axum::serve(listener, app)
            .with_graceful_shutdown(async move { server_shutdown.notified().await })
            .await
    });

    tokio::signal::ctrl_c().await?;
    tracing::info!(event_name = "system.server.stopping", "beacon server stopping");
    shutdown.notify_one();

    let grace = Duration::from_secs(config.server.graceful_shutdown_secs);
    match tokio::time::timeout(grace, server).await {
        Ok(joined) => joined??,
        Err(_) => {
            tracing::warn!(
                event_name = "system.server.drain_timeout",
                grace_secs = config.server.graceful_shutdown_secs,
                "open connections did not drain in time, exiting"
            );
        }
    }

    Ok(())
}
