//! Application configuration.
//!
//! Defaults, then environment (`SDGUARD_DATA_DIR`, `SDGUARD_LOG`), then
//! command-line flags.

use std::path::PathBuf;
use std::time::Duration;

/// Env var overriding the data directory.
pub const DATA_DIR_ENV: &str = "SDGUARD_DATA_DIR";
/// Env var overriding the log filter.
pub const LOG_ENV: &str = "SDGUARD_LOG";

/// Directory name under the platform config dir.
const APP_DIR: &str = "steam-desktop-guard";

/// Runtime configuration.
///
/// # Example
///
/// ```ignore
/// use sdguard::config::AppConfig;
///
/// let config = AppConfig::default()
///     .with_data_dir("/tmp/guard")
///     .with_log_level("debug");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Where `config.json` and the log file live
    pub data_dir: PathBuf,
    /// Default tracing filter when `SDGUARD_LOG` is unset
    pub log_level: String,
    /// Rotation timer tick (default: 1s)
    pub tick_interval: Duration,
    /// How long "Copied!" stays visible (default: 2s)
    pub copy_feedback: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            log_level: "info".to_string(),
            tick_interval: Duration::from_secs(1),
            copy_feedback: Duration::from_secs(2),
        }
    }
}

/// `<config_dir>/steam-desktop-guard`, or `./steam-desktop-guard` when the
/// platform has no config dir.
pub fn default_data_dir() -> PathBuf {
    dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(APP_DIR)
}

/// What the command line asked for.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Run(AppConfig),
    Version,
    Help,
}

/// Bad command-line input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    MissingValue(String),
    Unknown(String),
}

impl std::fmt::Display for ArgError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ArgError::MissingValue(flag) => write!(f, "{} requires a value", flag),
            ArgError::Unknown(arg) => write!(f, "unknown argument: {}", arg),
        }
    }
}

impl std::error::Error for ArgError {}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_data_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.data_dir = dir.into();
        self
    }

    pub fn with_log_level(mut self, level: impl Into<String>) -> Self {
        self.log_level = level.into();
        self
    }

    pub fn with_copy_feedback(mut self, duration: Duration) -> Self {
        self.copy_feedback = duration;
        self
    }

    /// Defaults overlaid with `SDGUARD_DATA_DIR` and `SDGUARD_LOG`.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(dir) = non_empty_var(DATA_DIR_ENV) {
            config = config.with_data_dir(dir);
        }
        if let Some(level) = non_empty_var(LOG_ENV) {
            config = config.with_log_level(level);
        }
        config
    }

    pub fn log_file(&self) -> PathBuf {
        self.data_dir.join("sdguard.log")
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Apply command-line flags (without the program name) on top of `base`.
pub fn parse_args<I>(base: AppConfig, args: I) -> Result<Command, ArgError>
where
    I: IntoIterator<Item = String>,
{
    let mut config = base;
    let mut args = args.into_iter();

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--version" | "-V" => return Ok(Command::Version),
            "--help" | "-h" => return Ok(Command::Help),
            "--data-dir" => {
                let dir = args
                    .next()
                    .ok_or_else(|| ArgError::MissingValue(arg.clone()))?;
                config = config.with_data_dir(dir);
            }
            other => {
                if let Some(dir) = other.strip_prefix("--data-dir=") {
                    config = config.with_data_dir(dir);
                } else {
                    return Err(ArgError::Unknown(other.to_string()));
                }
            }
        }
    }

    Ok(Command::Run(config))
}

pub const USAGE: &str = "\
Usage: sdguard [OPTIONS]

Options:
  --data-dir <PATH>  Directory holding config.json and sdguard.log
  -V, --version      Print version
  -h, --help         Print this help

Environment:
  SDGUARD_DATA_DIR   Same as --data-dir
  SDGUARD_LOG        Log filter (default: info)";
