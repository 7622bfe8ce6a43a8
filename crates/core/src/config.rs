//! Shared configuration logic
//!
//! Handles loading of the credentials and poll interval from environment variables.

use crate::error::ConfigError;
use std::env;

/// Default delay between two polls, in seconds
pub const DEFAULT_RETRY_TIME_SECS: u64 = 600;

/// Configuration required by every part of the bot
#[derive(Clone)]
pub struct CoreConfig {
    /// Practicum API OAuth token
    pub practicum_token: String,

    /// Telegram bot token
    pub telegram_token: String,

    /// Chat that receives the notifications (numeric id or `@channel`)
    pub telegram_chat_id: String,

    /// Delay between polls in seconds (default: 600)
    pub retry_time_secs: u64,
}

impl std::fmt::Debug for CoreConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CoreConfig")
            .field("practicum_token", &"<redacted>")
            .field("telegram_token", &"<redacted>")
            .field("telegram_chat_id", &self.telegram_chat_id)
            .field("retry_time_secs", &self.retry_time_secs)
            .finish()
    }
}

/// Returns true when all three credentials are present and non-blank
pub fn check_tokens(
    practicum_token: Option<&str>,
    telegram_token: Option<&str>,
    telegram_chat_id: Option<&str>,
) -> bool {
    [practicum_token, telegram_token, telegram_chat_id]
        .iter()
        .all(|value| value.is_some_and(|v| !v.trim().is_empty()))
}

impl CoreConfig {
    /// Load configuration from environment variables
    ///
    /// This will also initialize dotenv if it hasn't been done yet.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if it exists
        dotenvy::dotenv().ok();

        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable source
    pub fn from_vars<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let practicum_token = lookup("PRACTICUM_TOKEN");
        let telegram_token = lookup("TELEGRAM_TOKEN");
        let telegram_chat_id = lookup("TELEGRAM_CHAT_ID");

        if !check_tokens(
            practicum_token.as_deref(),
            telegram_token.as_deref(),
            telegram_chat_id.as_deref(),
        ) {
            let missing = [
                ("PRACTICUM_TOKEN", &practicum_token),
                ("TELEGRAM_TOKEN", &telegram_token),
                ("TELEGRAM_CHAT_ID", &telegram_chat_id),
            ]
            .into_iter()
            .filter(|(_, value)| value.as_deref().is_none_or(|v| v.trim().is_empty()))
            .map(|(name, _)| name)
            .collect();
            return Err(ConfigError::MissingTokens(missing));
        }

        let retry_time_secs = match lookup("RETRY_TIME") {
            None => DEFAULT_RETRY_TIME_SECS,
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => secs,
                _ => return Err(ConfigError::InvalidRetryTime(raw)),
            },
        };

        Ok(Self {
            practicum_token: practicum_token.unwrap_or_default(),
            telegram_token: telegram_token.unwrap_or_default(),
            telegram_chat_id: telegram_chat_id.unwrap_or_default().trim().to_string(),
            retry_time_secs,
        })
    }
}
