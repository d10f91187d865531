//! Logging initialization and configuration.
//!
//! Logs are written to files under the user config directory so they
//! never mix with command output on the terminal. Log files are
//! automatically rotated daily.
//!
//! # Configuration
//!
//! The log level can be controlled via the `RUST_LOG` environment variable:
//! - `RUST_LOG=debug` - Show debug and higher level logs
//! - `RUST_LOG=info` - Show info and higher level logs (default)
//! - `RUST_LOG=warn` - Show warnings and errors only
//! - `RUST_LOG=error` - Show errors only

use std::fs;

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::ConfigStore;

/// Initialize the logging system.
///
/// Log files land in `logs/` under the config directory, one file per
/// day, e.g. `logs/naturally-linux.log.2026-08-22`.
///
/// The log level is controlled by the `RUST_LOG` environment variable,
/// defaulting to `info` if not set.
pub fn init_logging() {
    let log_dir = ConfigStore::default_location().log_dir();

    // Ensure the logs directory exists
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Warning: Failed to create logs directory: {}", e);
        return;
    }

    let file_appender = tracing_appender::rolling::daily(&log_dir, "naturally-linux.log");

    // Use non-blocking writer so logging never stalls the CLI
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    // Create the file layer with formatting
    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI colors in log files
        .with_target(true) // Include module path
        .with_thread_ids(true) // Include thread IDs for debugging
        .with_line_number(true); // Include line numbers

    // Configure environment filter
    // Default to "info" level if RUST_LOG is not set
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // Build and initialize the subscriber
    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    // We intentionally leak the guard to keep the non-blocking writer alive
    // for the entire program lifetime. This is acceptable for a main application.
    std::mem::forget(guard);

    tracing::info!("Logging initialized - writing to {}", log_dir.display());
}
