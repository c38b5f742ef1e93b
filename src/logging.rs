//! Tracing setup.
//!
//! The TUI owns the terminal, so events go to `<data_dir>/sdguard.log`.

use std::fs::{self, OpenOptions};
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::config::{AppConfig, LOG_ENV};
use crate::error::{GuardError, GuardResult};

/// Filter from `SDGUARD_LOG`, else `default_level`, else `info`.
pub fn build_filter(default_level: &str) -> EnvFilter {
    EnvFilter::try_from_env(LOG_ENV)
        .or_else(|_| EnvFilter::try_new(default_level))
        .unwrap_or_else(|_| EnvFilter::new("info"))
}

/// Install the global subscriber writing to the configured log file.
///
/// Calling it twice is harmless; the second call reports the existing
/// subscriber and changes nothing.
pub fn init_logging(config: &AppConfig) -> GuardResult<()> {
    let path = config.log_file();
    open_log_dir(&path)?;

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .map_err(|e| GuardError::Storage(format!("cannot open log file {:?}: {}", path, e)))?;

    let result = tracing_subscriber::fmt()
        .with_env_filter(build_filter(&config.log_level))
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .try_init();

    if let Err(e) = result {
        tracing::debug!("Logging already initialised: {}", e);
    }
    tracing::info!(version = env!("CARGO_PKG_VERSION"), "sdguard starting");
    Ok(())
}

fn open_log_dir(path: &Path) -> GuardResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    Ok(())
}
