//! Timestamp formatting utilities
//!
//! Provides the configurable timestamp formats used in rendered log lines.
//! The default is human-readable local time with millisecond precision.

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};

/// Timestamp format options for rendered log lines.
///
/// # Examples
///
/// ```
/// use dbglog::core::TimestampFormat;
/// use chrono::Local;
///
/// let format = TimestampFormat::LocalMillis;
/// let timestamp = format.format(&Local::now());
/// // Output: "2025-01-08 10:30:45,123"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimestampFormat {
    /// Local time with milliseconds: `2025-01-08 10:30:45,123`
    ///
    /// This is the default format.
    #[default]
    LocalMillis,

    /// RFC 3339 format: `2025-01-08T10:30:45+09:00`
    Rfc3339,

    /// Unix timestamp in seconds: `1736332245`
    Unix,

    /// Unix timestamp in milliseconds: `1736332245123`
    UnixMillis,

    /// Custom strftime format
    ///
    /// # Examples
    ///
    /// ```
    /// use dbglog::core::TimestampFormat;
    ///
    /// let format = TimestampFormat::Custom("%d/%b/%Y:%H:%M:%S".to_string());
    /// ```
    Custom(String),
}

impl TimestampFormat {
    /// Format a `DateTime<Local>` according to this format
    #[must_use]
    pub fn format(&self, datetime: &DateTime<Local>) -> String {
        match self {
            TimestampFormat::LocalMillis => {
                datetime.format("%Y-%m-%d %H:%M:%S,%3f").to_string()
            }
            TimestampFormat::Rfc3339 => datetime.to_rfc3339(),
            TimestampFormat::Unix => datetime.timestamp().to_string(),
            TimestampFormat::UnixMillis => datetime.timestamp_millis().to_string(),
            TimestampFormat::Custom(format_str) => datetime.format(format_str).to_string(),
        }
    }

    /// Check if this is a Unix-based numeric format
    #[must_use]
    pub fn is_numeric(&self) -> bool {
        matches!(self, TimestampFormat::Unix | TimestampFormat::UnixMillis)
    }
}
