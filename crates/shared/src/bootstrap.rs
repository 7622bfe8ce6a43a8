//! Process bootstrap shared by the bot binaries
//!
//! Loads `.env` and installs the tracing subscriber.

use anyhow::{Context, Result};
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize dotenvy
pub fn init_env() {
    dotenvy::dotenv().ok();
}

/// Log file location, `LOG_FILE` or `main.log` in the working directory
pub fn log_file_path() -> PathBuf {
    std::env::var("LOG_FILE").map_or_else(|_| PathBuf::from("main.log"), PathBuf::from)
}

/// Create the log file, truncating whatever the previous run left behind
pub fn open_log_file(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create log directory {}", parent.display()))?;
    }

    File::create(path).with_context(|| format!("Failed to open log file {}", path.display()))
}

/// Initialize tracing: console output mirrored into a plain-text log file
///
/// The returned guard must be kept alive for the duration of the program to ensure logs are flushed.
pub fn init_tracing(service_name: &str) -> Result<tracing_appender::non_blocking::WorkerGuard> {
    let file = open_log_file(&log_file_path())?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    let default_filter = format!("info,{service_name}=debug,homework_core=debug");

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::fmt::layer()
                .with_ansi(false)
                .with_writer(non_blocking),
        )
        .init();

    Ok(guard)
}
