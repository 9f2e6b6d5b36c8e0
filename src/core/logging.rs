//! Logging configuration and initialization
//!
//! This module sets up the tracing subscriber for structured logging
//! throughout the application.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Initialize the logging system with the specified level
///
/// A `RUST_LOG` environment filter takes precedence when set; otherwise the
/// configured level is used, falling back to "info" if it is not a level
/// tracing understands.
pub fn init_logging(log_level: &str) {
    let level = log_level.trim().to_lowercase();

    let valid_levels = ["trace", "debug", "info", "warn", "error"];
    let final_level = if valid_levels.contains(&level.as_str()) {
        level
    } else {
        "info".to_string()
    };

    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(final_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
