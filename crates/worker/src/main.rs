//! Homework Worker - standalone binary
//!
//! Runs the poll loop until Ctrl+C or SIGTERM.
//! For library usage, see the worker crate's lib.rs.

use anyhow::Result;
use teloxide::Bot;
use tokio::signal;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    homework_shared::init_env();

    // The guard must be kept alive for the duration of the program to ensure logs are flushed
    let _guard = homework_shared::init_tracing("worker")?;

    info!("Starting homework status bot");

    // Missing credentials are fatal: never enter the loop without them
    let config = worker::Config::from_env().inspect_err(|e| {
        error!("Startup aborted: {:#}", e);
    })?;
    info!("✓ Configuration loaded: {:?}", config.core);

    let bot = Bot::new(&config.telegram_token);
    info!("Telegram bot initialized");

    let shutdown = CancellationToken::new();
    let signal_token = shutdown.clone();
    tokio::spawn(async move {
        wait_for_shutdown().await;
        info!("📡 Shutdown signal received");
        signal_token.cancel();
    });

    worker::run_worker(bot, config, Some(shutdown)).await?;

    info!("✓ Worker stopped");
    Ok(())
}

async fn wait_for_shutdown() {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            error!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                error!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }
}
