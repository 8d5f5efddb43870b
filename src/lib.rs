//! # dbglog
//!
//! A verbosity-gated logging facility with multiple simultaneous output
//! sinks: console streams, append-mode files, the platform system log, and
//! caller-supplied custom sinks.
//!
//! ## Features
//!
//! - **Fine-grained gating**: every call carries an integer verbosity
//!   level, compared against the logger's floor before any formatting work
//! - **Two independent axes**: severity (DEBUG..CRITICAL) categorizes a
//!   record; only the verbosity level decides whether it is emitted
//! - **Multiple sinks**: stderr, stdout, syslog, file, and custom sinks,
//!   all sharing one line template
//! - **Caller identification**: the macros capture the invoking function's
//!   name at the call site
//!
//! ## Example
//!
//! ```
//! use dbglog::{debug, Logger};
//!
//! fn warm_cache(logger: &Logger) {
//!     debug!(logger, 2, "cache warmed,", 128, "entries");
//! }
//!
//! let logger = Logger::builder()
//!     .name("cached")
//!     .verbosity_floor(3)
//!     .build()
//!     .unwrap();
//! warm_cache(&logger);
//! logger.close().unwrap();
//! ```

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        Formatter, LogError, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerMetrics,
        Result, Severity, Sink, TimestampFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink};

    #[cfg(unix)]
    pub use crate::sinks::{Facility, SyslogSink};
}

pub use crate::core::{
    Formatter, LogError, LogRecord, Logger, LoggerBuilder, LoggerConfig, LoggerMetrics, Result,
    Severity, Sink, TimestampFormat,
};
pub use crate::sinks::{ConsoleSink, FileSink};

#[cfg(unix)]
pub use crate::sinks::{Facility, SyslogSink};
