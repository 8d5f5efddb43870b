//! Sink implementations

pub mod console;
pub mod file;

#[cfg(unix)]
pub mod syslog;

pub use console::ConsoleSink;
pub use file::FileSink;

#[cfg(unix)]
pub use syslog::{Facility, SyslogSink};

// Re-export the trait for convenience
pub use crate::core::Sink;
