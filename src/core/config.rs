//! Declarative logger configuration
//!
//! Mirrors the builder surface as a serde document so deployments can keep
//! sink wiring in a config file. Custom sinks cannot be expressed
//! declaratively; attach those through the builder.

use super::error::Result;
use super::timestamp::TimestampFormat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Construction options for a [`Logger`](crate::Logger), one field per
/// independently-toggled sink or formatting switch.
///
/// # Examples
///
/// ```
/// use dbglog::LoggerConfig;
///
/// let config = LoggerConfig::from_json(
///     r#"{"name": "relay", "verbosity_floor": 3, "to_stdout": true, "to_stderr": false}"#,
/// ).unwrap();
/// assert_eq!(config.name, "relay");
/// assert_eq!(config.verbosity_floor, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggerConfig {
    /// Logger identity, included in every line and used as the syslog tag.
    pub name: String,
    /// Calls with `level` above this floor produce no output.
    pub verbosity_floor: i32,
    pub to_stdout: bool,
    pub to_stderr: bool,
    pub to_syslog: bool,
    /// Syslog facility name (`daemon`, `user`, `local0`..`local7`).
    pub syslog_facility: String,
    /// Append-mode log file path; `None` disables the file sink.
    pub to_file: Option<PathBuf>,
    /// Include the severity token in formatted lines.
    pub print_level: bool,
    pub timestamp_format: TimestampFormat,
}

impl Default for LoggerConfig {
    fn default() -> Self {
        Self {
            name: "dbglog".to_string(),
            verbosity_floor: 0,
            to_stdout: false,
            to_stderr: true,
            to_syslog: false,
            syslog_facility: "daemon".to_string(),
            to_file: None,
            print_level: true,
            timestamp_format: TimestampFormat::default(),
        }
    }
}

impl LoggerConfig {
    /// Parse a configuration document from JSON.
    ///
    /// Unknown fields are rejected; omitted fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}
