//! Chat notifications
//!
//! `Notifier` is the seam between the poll loop and Telegram so the loop can
//! be driven without a real bot.

use std::future::Future;

use teloxide::prelude::*;
use teloxide::types::Recipient;
use tracing::{error, info};

use crate::error::NotifyError;

/// Something that can deliver a plain-text message to the configured chat
pub trait Notifier {
    fn send(&self, text: &str) -> impl Future<Output = Result<(), NotifyError>> + Send;
}

/// Sends messages through the Telegram Bot API
#[derive(Debug, Clone)]
pub struct TelegramNotifier {
    bot: Bot,
    recipient: Recipient,
}

impl TelegramNotifier {
    /// Numeric chat ids go to `ChatId`, anything else is treated as a channel username
    pub fn new(bot: Bot, chat_id: &str) -> Self {
        Self {
            bot,
            recipient: parse_recipient(chat_id),
        }
    }

    pub const fn recipient(&self) -> &Recipient {
        &self.recipient
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&self, text: &str) -> Result<(), NotifyError> {
        self.bot
            .send_message(self.recipient.clone(), text.to_string())
            .await?;
        Ok(())
    }
}

fn parse_recipient(chat_id: &str) -> Recipient {
    chat_id.parse::<i64>().map_or_else(
        |_| Recipient::ChannelUsername(chat_id.to_string()),
        |id| Recipient::Id(ChatId(id)),
    )
}

/// Send `text` and log the outcome
///
/// Failures are logged and returned, never swallowed.
pub async fn send_message<N: Notifier>(notifier: &N, text: &str) -> Result<(), NotifyError> {
    match notifier.send(text).await {
        Ok(()) => {
            info!("Message sent: {}", text);
            Ok(())
        }
        Err(e) => {
            error!("Failed to send message: {}", e);
            Err(e)
        }
    }
}
