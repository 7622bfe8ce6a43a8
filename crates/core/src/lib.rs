//! Homework Core - Domain logic for the homework status bot
//!
//! This crate contains pure domain logic with no network I/O.
//! Configuration loading, the homework model, response validation and
//! error types are defined here.

pub mod config;
pub mod error;
pub mod models;
pub mod validation;

pub use config::CoreConfig;
pub use error::{ConfigError, ValidationError};
pub use models::{Homework, HomeworkStatus};
pub use validation::{check_response, current_date, parse_homework, parse_status};
