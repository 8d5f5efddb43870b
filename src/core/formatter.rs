//! Shared line formatter
//!
//! One `Formatter` is built per logger and shared by every attached sink,
//! so all destinations render the same template:
//!
//! `<SEVERITY> <NAME> <TIMESTAMP> from: <CALLER> <MESSAGE> <ARGS...>`

use super::record::LogRecord;
use super::timestamp::TimestampFormat;
use std::sync::Arc;

/// The line template shared by all sinks of one logger.
///
/// Wrapped in an [`Arc`] by the logger; sinks receive a reference on every
/// write rather than owning a copy, which is what keeps the output of
/// caller-supplied sinks aligned with the built-in ones.
#[derive(Debug, Clone)]
pub struct Formatter {
    name: String,
    print_level: bool,
    timestamp_format: TimestampFormat,
}

impl Formatter {
    pub fn new(
        name: impl Into<String>,
        print_level: bool,
        timestamp_format: TimestampFormat,
    ) -> Self {
        Self {
            name: name.into(),
            print_level,
            timestamp_format,
        }
    }

    /// The logger identity included in every line.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Whether rendered lines carry the severity token.
    pub fn print_level(&self) -> bool {
        self.print_level
    }

    pub fn timestamp_format(&self) -> &TimestampFormat {
        &self.timestamp_format
    }

    /// Render the full line for a record, without a trailing newline.
    #[must_use]
    pub fn render(&self, record: &LogRecord) -> String {
        let timestamp = self.timestamp_format.format(&record.timestamp);
        if self.print_level {
            format!(
                "{} {} {} {}",
                record.severity.as_str(),
                self.name,
                timestamp,
                record.body()
            )
        } else {
            format!("{} {} {}", self.name, timestamp, record.body())
        }
    }

    /// Wrap this formatter in an Arc for sharing across sinks
    #[must_use]
    pub fn shared(self) -> Arc<Self> {
        Arc::new(self)
    }
}
