//! Logging configuration and setup
//!
//! This module provides logging initialization and structured logging
//! helpers for the VenueLens engine.

use tracing::{error, info, warn};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::LoggingConfig;
use crate::models::EventStatus;
use crate::utils::errors::Result;

/// Initialize logging based on configuration.
///
/// Returns the file writer guard; the caller must keep it alive for the
/// lifetime of the process or buffered log lines are lost on shutdown.
pub fn init_logging(config: &LoggingConfig) -> Result<WorkerGuard> {
    let file_appender = tracing_appender::rolling::daily(&config.file_path, "venuelens.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&config.level))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stdout))
        .with(tracing_subscriber::fmt::layer().with_writer(non_blocking))
        .init();

    info!("Logging initialized with level: {}", config.level);
    Ok(guard)
}

/// Log event status changes with structured data
pub fn log_status_change(event_id: i64, from: EventStatus, to: EventStatus) {
    info!(
        event_id = event_id,
        from = %from,
        to = %to,
        "Event status changed"
    );
}

/// Log application responses
pub fn log_application_response(event_id: i64, photographer_id: i64, approved: bool) {
    info!(
        event_id = event_id,
        photographer_id = photographer_id,
        approved = approved,
        "Application response recorded"
    );
}

/// Log destructive operations before they reach the gateway
pub fn log_destructive_operation(event_id: i64, operation: &str, warning: &str) {
    warn!(
        event_id = event_id,
        operation = operation,
        warning = warning,
        "Destructive operation requested"
    );
}

/// Log API errors with context
pub fn log_api_error(endpoint: &str, error: &str) {
    error!(
        endpoint = endpoint,
        error = error,
        "LocationEvent API error"
    );
}
