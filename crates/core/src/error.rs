//! Error types for homework core domain logic

use thiserror::Error;

/// Startup configuration errors
///
/// These are the only fatal errors: the poll loop never starts when one occurs.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Missing required environment variables: {}", .0.join(", "))]
    MissingTokens(Vec<&'static str>),

    #[error("RETRY_TIME must be a positive number of seconds, got {0:?}")]
    InvalidRetryTime(String),
}

/// Errors raised while validating an API response or a homework record
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing key in response: {0}")]
    MissingKey(&'static str),

    #[error("Malformed homeworks data: expected a list")]
    MalformedHomeworks,

    #[error("Unknown homework status: {0}")]
    UnknownStatus(String),
}

/// Result type alias for validation operations
pub type ValidationResult<T> = Result<T, ValidationError>;
