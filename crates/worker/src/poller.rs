//! Poll-check-notify loop
//!
//! One cycle fetches the statuses, compares the newest homework with the last
//! one announced and either notifies or advances the cursor. Errors from a
//! cycle are reported once at the loop boundary and never stop the loop.

use std::time::Duration;

use chrono::Utc;
use homework_core::{Homework, check_response, current_date, parse_homework};
use tokio_util::sync::CancellationToken;
use tracing::{debug, error, info, warn};

use crate::api::PracticumClient;
use crate::error::CycleError;
use crate::notifier::{Notifier, send_message};

/// Result of a successful cycle
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CycleOutcome {
    /// A new status was announced; the cursor was left untouched
    Notified(String),
    /// Nothing new; the cursor moved to the server time
    NoChange { cursor: i64 },
}

/// Poll loop state: the API client, the notifier, the cursor and the last announced homework
pub struct Poller<N> {
    client: PracticumClient,
    notifier: N,
    retry_interval: Duration,
    cursor: i64,
    last_seen: Option<Homework>,
}

impl<N: Notifier> Poller<N> {
    /// Create a poller whose cursor starts at the current time
    pub fn new(client: PracticumClient, notifier: N, retry_interval: Duration) -> Self {
        Self {
            client,
            notifier,
            retry_interval,
            cursor: Utc::now().timestamp(),
            last_seen: None,
        }
    }

    #[must_use]
    pub fn with_cursor(mut self, cursor: i64) -> Self {
        self.cursor = cursor;
        self
    }

    pub const fn cursor(&self) -> i64 {
        self.cursor
    }

    pub const fn last_seen(&self) -> Option<&Homework> {
        self.last_seen.as_ref()
    }

    /// Run a single poll cycle
    pub async fn run_cycle(&mut self) -> Result<CycleOutcome, CycleError> {
        let body = self.client.fetch(self.cursor).await?;
        let homeworks = check_response(&body)?;
        let newest = homeworks.first().map(parse_homework).transpose()?;

        match newest {
            Some(homework) if self.last_seen.as_ref() != Some(&homework) => {
                let message = homework.status_message();
                send_message(&self.notifier, &message).await?;
                // Only remember what actually reached the chat
                self.last_seen = Some(homework);
                Ok(CycleOutcome::Notified(message))
            }
            _ => {
                debug!("No review status updates");
                self.cursor = current_date(&body).unwrap_or_else(|| {
                    warn!("Response has no usable current_date, using local time as cursor");
                    Utc::now().timestamp()
                });
                Ok(CycleOutcome::NoChange {
                    cursor: self.cursor,
                })
            }
        }
    }

    /// Log a failed cycle and try to tell the chat about it
    pub async fn report_failure(&self, failure: &CycleError) {
        let message = format!("Bot failure: {failure}");
        error!("{}", message);

        if send_message(&self.notifier, &message).await.is_err() {
            warn!("Failure report was not delivered to the chat");
        }
    }

    /// Poll until cancelled, sleeping the retry interval after every cycle
    pub async fn run(mut self, shutdown: Option<CancellationToken>) {
        info!(
            "Starting poller: endpoint={}, retry_interval={}s, cursor={}",
            self.client.endpoint(),
            self.retry_interval.as_secs(),
            self.cursor
        );

        loop {
            // Check for shutdown signal
            if let Some(ref token) = shutdown
                && token.is_cancelled()
            {
                info!("Poller received shutdown signal");
                break;
            }

            match self.run_cycle().await {
                Ok(CycleOutcome::Notified(_)) => {}
                Ok(CycleOutcome::NoChange { cursor }) => debug!("Cursor advanced to {}", cursor),
                Err(e) => self.report_failure(&e).await,
            }

            match shutdown {
                Some(ref token) => {
                    tokio::select! {
                        () = tokio::time::sleep(self.retry_interval) => {}
                        () = token.cancelled() => {
                            info!("Poller received shutdown signal");
                            break;
                        }
                    }
                }
                None => tokio::time::sleep(self.retry_interval).await,
            }
        }
    }
}
