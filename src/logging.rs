//! Diagnostic output setup.
//!
//! Everything goes to stderr through `tracing`, with local timestamps. OpenCV's
//! own logger is turned down to errors so a rejected video is reported once,
//! by the validity check, instead of twice.

use std::sync::OnceLock;

use opencv::core;
use tracing_subscriber::fmt::{format::Writer, time::FormatTime};
use tracing_subscriber::EnvFilter;

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Outcome of the first `init` call; later callers get the same answer.
static INSTALLED: OnceLock<Result<(), String>> = OnceLock::new();

#[derive(Debug, thiserror::Error)]
pub enum LoggingError {
    #[error("failed to install global tracing subscriber: {0}")]
    SetGlobal(String),
}

/// Local wall-clock stamps, same shape as the player's old debug log.
struct LocalTime;

impl FormatTime for LocalTime {
    fn format_time(&self, w: &mut Writer<'_>) -> std::fmt::Result {
        write!(w, "{}", chrono::Local::now().format(TIMESTAMP_FORMAT))
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over `verbose` when set.
///
/// Only the first call installs anything, even when callers race; the rest
/// return its result.
pub fn init(verbose: bool) -> Result<(), LoggingError> {
    INSTALLED
        .get_or_init(|| install(verbose))
        .clone()
        .map_err(LoggingError::SetGlobal)
}

fn install(verbose: bool) -> Result<(), String> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_timer(LocalTime)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| e.to_string())?;

    if let Err(e) = core::set_log_level(core::LogLevel::LOG_LEVEL_ERROR) {
        tracing::debug!("could not lower OpenCV log level: {}", e);
    }
    Ok(())
}
