//! Log record structure

use super::severity::Severity;
use chrono::{DateTime, Local};
use serde::Serialize;
use std::fmt;

/// A single realized logging call, handed to every sink.
///
/// Records are ephemeral: one is built only after the verbosity gate has
/// passed, carried through dispatch, and dropped. Extra positional
/// arguments are stringified at construction in their original order.
#[derive(Debug, Clone, Serialize)]
pub struct LogRecord {
    pub severity: Severity,
    /// Verbosity level supplied by the caller, independent of severity.
    pub level: i32,
    /// Name of the function that invoked the logging call.
    pub caller: String,
    pub message: String,
    pub args: Vec<String>,
    pub timestamp: DateTime<Local>,
}

impl LogRecord {
    /// Sanitize a message fragment to prevent log injection.
    ///
    /// Replaces newlines, carriage returns, and tabs with escape sequences
    /// so a record always renders as a single line.
    fn sanitize(text: &str) -> String {
        text.replace('\n', "\\n")
            .replace('\r', "\\r")
            .replace('\t', "\\t")
    }

    pub fn new(
        severity: Severity,
        level: i32,
        caller: &str,
        message: &str,
        args: &[&dyn fmt::Display],
    ) -> Self {
        Self {
            severity,
            level,
            caller: caller.to_string(),
            message: Self::sanitize(message),
            args: args
                .iter()
                .map(|arg| Self::sanitize(&arg.to_string()))
                .collect(),
            timestamp: Local::now(),
        }
    }

    /// Render the message body: `from: <caller> <message> <arg1> <arg2> ...`
    ///
    /// Arguments are space-joined after the message, regardless of their
    /// original types. Prefixing with the logger name, timestamp, and
    /// severity token is the formatter's job.
    pub fn body(&self) -> String {
        let mut body = format!("from: {} {}", self.caller, self.message);
        for arg in &self.args {
            body.push(' ');
            body.push_str(arg);
        }
        body
    }
}
