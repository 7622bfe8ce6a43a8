//! Worker error types
//!
//! `CycleError` is the single error returned by one poll cycle; the loop
//! matches on it once and never lets it escape.

use homework_core::ValidationError;
use thiserror::Error;

/// Practicum API failures
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Endpoint {endpoint} is unavailable. API response code: {status}")]
    StatusCode { endpoint: String, status: u16 },

    #[error("Request to Practicum API failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Invalid Practicum endpoint {0}")]
    InvalidEndpoint(String),

    #[error("JSON invalid: {0}")]
    InvalidJson(#[from] serde_json::Error),
}

/// Messaging failures
#[derive(Error, Debug)]
pub enum NotifyError {
    #[error("Failed to send Telegram message: {0}")]
    Telegram(#[from] teloxide::RequestError),

    #[error("Failed to send message: {0}")]
    SendFailed(String),
}

/// Everything that can go wrong during one poll cycle
#[derive(Error, Debug)]
pub enum CycleError {
    #[error(transparent)]
    Api(#[from] ApiError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Notify(#[from] NotifyError),
}
