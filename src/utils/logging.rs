//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging utilities
//! for the bridge.

use tracing::{info, warn, error, debug};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use crate::config::LoggingConfig;
use crate::utils::errors::{BridgeError, Result};
use crate::utils::helpers::truncate_text;

/// Longest backend message echoed into the logs
const MAX_LOGGED_MESSAGE: usize = 200;

/// Initialize logging based on configuration.
///
/// The returned guard flushes the file writer on drop and must be held for the
/// lifetime of the program.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, &config.file_name);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_ansi(false).with_writer(non_blocking))
        .try_init()
        .map_err(|e| BridgeError::Config(format!("Failed to install subscriber: {}", e)))?;

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log a user-triggered action
pub fn log_action(action: &str, request_id: &str, details: Option<&str>) {
    info!(
        action = action,
        request_id = request_id,
        details = details,
        "Action triggered"
    );
}

/// Log a completed backend call
pub fn log_api_call(method: &str, path: &str, status: u16) {
    if (200..300).contains(&status) {
        debug!(method = method, path = path, status = status, "Backend call completed");
    } else {
        warn!(method = method, path = path, status = status, "Backend call returned non-success status");
    }
}

/// Log the message the backend returned for a mutating action
pub fn log_backend_message(action: &str, message: &str) {
    debug!(
        action = action,
        message = %truncate_text(message, MAX_LOGGED_MESSAGE),
        "Backend message received"
    );
}

/// Log API errors with context
pub fn log_api_error(api: &str, error: &str, context: Option<&str>) {
    error!(
        api = api,
        error = error,
        context = context,
        "API error occurred"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_logging_installs_once() {
        let dir = tempfile::tempdir().unwrap();
        let config = LoggingConfig {
            level: "debug".to_string(),
            file_path: dir.path().to_string_lossy().into_owned(),
            file_name: "bridge-test.log".to_string(),
        };

        let guard = init_logging(&config).expect("first subscriber installs");
        log_action("fetch-users", "test-request", Some("unit test"));
        log_api_call("GET", "/users/getall", 200);
        drop(guard);

        // a second global subscriber is refused
        assert!(init_logging(&config).is_err());
    }
}
