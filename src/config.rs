//! Driver configuration read from environment variables.
//!
//! Every setting has a default and can be overridden through a
//! `SYCALC_`-prefixed environment variable. Command-line flags take
//! precedence over the environment.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;

const LOG_LEVEL_VAR: &str = "SYCALC_LOG_LEVEL";
const HISTORY_VAR: &str = "SYCALC_HISTORY";
const BANNER_VAR: &str = "SYCALC_BANNER";

/// History file name inside the home directory
const HISTORY_FILE: &str = ".sycalc_history";

#[derive(Error, Debug, Clone, PartialEq)]
pub(crate) enum ConfigError {
    #[error("invalid configuration: unknown log level '{0}', expected one of: trace, debug, info, warn, error")]
    InvalidLogLevel(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::InvalidLogLevel(s.to_string())),
        }
    }
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`
    pub(crate) fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Settings for the command-line driver
///
/// # Environment Variables
///
/// - `SYCALC_LOG_LEVEL`: trace, debug, info, warn (default) or error
/// - `SYCALC_HISTORY`: REPL history file; empty disables history.
///   Defaults to `~/.sycalc_history`.
/// - `SYCALC_BANNER`: print a banner when the REPL starts
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Config {
    pub(crate) log_level: LogLevel,
    pub(crate) history_path: Option<PathBuf>,
    pub(crate) banner: bool,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            log_level: LogLevel::default(),
            history_path: default_history_path(),
            banner: false,
        }
    }
}

impl Config {
    /// Load configuration from the process environment
    pub(crate) fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let log_level = match lookup(LOG_LEVEL_VAR) {
            Some(val) => val.parse()?,
            None => LogLevel::default(),
        };

        let history_path = match lookup(HISTORY_VAR) {
            Some(val) if val.is_empty() => None,
            Some(val) => Some(PathBuf::from(val)),
            None => default_history_path(),
        };

        Ok(Config {
            log_level,
            history_path,
            banner: lookup(BANNER_VAR).is_some(),
        })
    }

    /// Apply command-line overrides on top of the environment
    pub(crate) fn apply_overrides(mut self, log_level: Option<LogLevel>) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        self
    }
}

fn default_history_path() -> Option<PathBuf> {
    env::var_os("HOME").map(|home| PathBuf::from(home).join(HISTORY_FILE))
}
