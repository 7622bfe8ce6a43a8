//! Homework Worker - Practicum review status poller
//!
//! Polls the homework statuses API and forwards status changes to Telegram

mod api;
mod config;
mod error;
mod notifier;
mod poller;

pub use api::{DEFAULT_ENDPOINT, PracticumClient};
pub use config::Config;
pub use error::{ApiError, CycleError, NotifyError};
pub use notifier::{Notifier, TelegramNotifier, send_message};
pub use poller::{CycleOutcome, Poller};

use anyhow::Result;
use teloxide::Bot;
use tokio::time::Duration;
use tokio_util::sync::CancellationToken;
use tracing::info;

/// Run the homework poller
///
/// This function runs the poll loop until cancelled. Errors inside the loop
/// are reported and retried on the next cycle; only client construction can fail.
///
/// # Arguments
/// * `bot` - Telegram bot instance for sending notifications
/// * `config` - Worker configuration
/// * `shutdown` - Optional cancellation token for graceful shutdown
pub async fn run_worker(bot: Bot, config: Config, shutdown: Option<CancellationToken>) -> Result<()> {
    let client = PracticumClient::new(&config)?;
    let notifier = TelegramNotifier::new(bot, &config.telegram_chat_id);

    info!(
        "Starting worker: retry_time={}s, request_timeout={}s",
        config.retry_time_secs, config.request_timeout_secs
    );

    Poller::new(client, notifier, Duration::from_secs(config.retry_time_secs))
        .run(shutdown)
        .await;

    Ok(())
}
