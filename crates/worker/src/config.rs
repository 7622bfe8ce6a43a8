//! Configuration for worker process
//!
//! Loads configuration from environment variables

use anyhow::{Context, Result, ensure};
use homework_core::config::CoreConfig;
use std::env;
use std::ops::Deref;

use crate::api::DEFAULT_ENDPOINT;

/// Default timeout for a single Practicum API request, in seconds
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Worker configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Core configuration
    pub core: CoreConfig,

    /// Homework statuses endpoint
    pub endpoint: String,

    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Wrap a core configuration with the default endpoint and timeout
    pub fn new(core: CoreConfig) -> Self {
        Self {
            core,
            endpoint: DEFAULT_ENDPOINT.to_string(),
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let core = CoreConfig::from_env()?;

        let request_timeout_secs: u64 = env::var("PRACTICUM_REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| DEFAULT_REQUEST_TIMEOUT_SECS.to_string())
            .parse()
            .context("PRACTICUM_REQUEST_TIMEOUT_SECS must be a valid integer")?;
        ensure!(
            request_timeout_secs > 0,
            "PRACTICUM_REQUEST_TIMEOUT_SECS must be a positive number of seconds"
        );

        Ok(Self {
            core,
            endpoint: env::var("PRACTICUM_ENDPOINT").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string()),
            request_timeout_secs,
        })
    }
}

impl Deref for Config {
    type Target = CoreConfig;

    fn deref(&self) -> &Self::Target {
        &self.core
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn core() -> CoreConfig {
        CoreConfig {
            practicum_token: "test_practicum".to_string(),
            telegram_token: "test_telegram".to_string(),
            telegram_chat_id: "12345".to_string(),
            retry_time_secs: 600,
        }
    }

    #[test]
    fn test_config_has_defaults() {
        let config = Config::new(core());

        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.request_timeout_secs, 30);
    }

    #[test]
    fn test_config_deref() {
        let config = Config::new(core());

        // Test Deref trait
        assert_eq!(config.practicum_token, "test_practicum");
        assert_eq!(config.telegram_chat_id, "12345");
        assert_eq!(config.retry_time_secs, 600);
    }

    #[test]
    #[serial]
    fn test_config_from_env_overrides() {
        unsafe {
            env::set_var("PRACTICUM_TOKEN", "p");
            env::set_var("TELEGRAM_TOKEN", "t");
            env::set_var("TELEGRAM_CHAT_ID", "1");
            env::set_var("PRACTICUM_ENDPOINT", "http://127.0.0.1:9/statuses/");
            env::set_var("PRACTICUM_REQUEST_TIMEOUT_SECS", "5");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.endpoint, "http://127.0.0.1:9/statuses/");
        assert_eq!(config.request_timeout_secs, 5);

        unsafe {
            env::set_var("PRACTICUM_REQUEST_TIMEOUT_SECS", "soon");
        }
        assert!(Config::from_env().is_err());

        unsafe {
            env::set_var("PRACTICUM_REQUEST_TIMEOUT_SECS", "0");
        }
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("positive number of seconds"));

        unsafe {
            env::remove_var("PRACTICUM_TOKEN");
        }
        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("PRACTICUM_TOKEN"));

        unsafe {
            env::remove_var("TELEGRAM_TOKEN");
            env::remove_var("TELEGRAM_CHAT_ID");
            env::remove_var("PRACTICUM_ENDPOINT");
            env::remove_var("PRACTICUM_REQUEST_TIMEOUT_SECS");
        }
    }
}
