//! Logging setup
//!
//! The subscriber is installed as the default for the current scope only and removed when
//! the returned guard drops. `LOG_LEVEL` accepts regular `tracing` directives as well as the
//! level names operators already use for this job (`DEBUG`, `INFO`, `WARNING`, `ERROR`,
//! `CRITICAL`), in any case.

use tracing::subscriber::DefaultGuard;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

pub const DEFAULT_LEVEL: &str = "info";

/// Map a `LOG_LEVEL` value to an `EnvFilter` directive
pub fn normalize_level(level: &str) -> String {
    let trimmed = level.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "critical" | "fatal" | "error" => "error".to_string(),
        "warning" | "warn" => "warn".to_string(),
        "info" => "info".to_string(),
        "debug" => "debug".to_string(),
        "trace" | "notset" => "trace".to_string(),
        _ => trimmed.to_string(),
    }
}

/// Build the filter for `level`.
///
/// Returns the filter and, when `level` could not be parsed, the rejected value so the
/// caller can report it once logging is up.
pub fn filter_for(level: Option<&str>) -> (EnvFilter, Option<String>) {
    let Some(level) = level.filter(|l| !l.trim().is_empty()) else {
        return (EnvFilter::new(DEFAULT_LEVEL), None);
    };

    match EnvFilter::try_new(normalize_level(level)) {
        Ok(filter) => (filter, None),
        Err(_) => (EnvFilter::new(DEFAULT_LEVEL), Some(level.to_string())),
    }
}

/// Install a scoped subscriber writing leveled text to stderr
pub fn init(level: Option<&str>) -> DefaultGuard {
    let (filter, rejected) = filter_for(level);

    let guard = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .set_default();

    if let Some(rejected) = rejected {
        tracing::warn!(
            "Invalid LOG_LEVEL {:?}, falling back to {}",
            rejected,
            DEFAULT_LEVEL
        );
    }

    guard
}
