//! Environment-driven configuration.
//!
//! Every setting has a default and a `SEQPROC_*` environment override;
//! a missing variable is never an error. The optional telemetry DSN mirrors
//! the log/alert collaborator: when unset, telemetry is simply off.

use std::env;
use std::path::PathBuf;

/// Environment variable overriding the log file path.
pub const LOG_PATH_VAR: &str = "SEQPROC_LOG";
/// Environment variable overriding the history CSV path.
pub const HISTORY_PATH_VAR: &str = "SEQPROC_HISTORY";
/// Environment variable carrying the telemetry collector DSN.
pub const TELEMETRY_DSN_VAR: &str = "SEQPROC_TELEMETRY_DSN";

const DEFAULT_LOG_PATH: &str = "seqproc.log";
const DEFAULT_HISTORY_PATH: &str = "seqproc_history.csv";

/// Resolved application configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Where the run log is written
    pub log_path: PathBuf,
    /// Where completed runs are appended as CSV
    pub history_path: PathBuf,
    /// DSN of an external telemetry collector, if configured
    pub telemetry_dsn: Option<String>,
}

impl Config {
    /// Reads the configuration from the environment, applying defaults.
    pub fn from_env() -> Self {
        Self {
            log_path: env::var(LOG_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_LOG_PATH)),
            history_path: env::var(HISTORY_PATH_VAR)
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_HISTORY_PATH)),
            telemetry_dsn: env::var(TELEMETRY_DSN_VAR)
                .ok()
                .filter(|dsn| !dsn.is_empty()),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            history_path: PathBuf::from(DEFAULT_HISTORY_PATH),
            telemetry_dsn: None,
        }
    }
}
