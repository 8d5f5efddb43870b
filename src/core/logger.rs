//! Main logger implementation

use super::{
    config::LoggerConfig,
    error::{LogError, Result},
    formatter::Formatter,
    metrics::LoggerMetrics,
    record::LogRecord,
    severity::Severity,
    sink::Sink,
    timestamp::TimestampFormat,
};
use crate::sinks::ConsoleSink;
use crate::sinks::FileSink;
#[cfg(unix)]
use crate::sinks::{Facility, SyslogSink};
use parking_lot::Mutex;
use std::fmt;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// A named, verbosity-gated logger owning a fixed set of sinks.
///
/// Every severity method funnels through one gate-format-dispatch routine:
/// the caller-supplied `level` is compared against the verbosity floor, and
/// only a passing call builds a [`LogRecord`] and hands it to each sink.
/// Severity categorizes; it never gates.
///
/// Sinks are registered during construction and released exactly once by
/// [`close`](Logger::close) or on drop. Reconfiguration means constructing
/// a new logger.
pub struct Logger {
    verbosity_floor: i32,
    formatter: Arc<Formatter>,
    sinks: Mutex<Vec<Box<dyn Sink>>>,
    closed: AtomicBool,
    metrics: LoggerMetrics,
}

impl Logger {
    /// Create a builder for Logger
    ///
    /// # Example
    /// ```
    /// use dbglog::Logger;
    ///
    /// let logger = Logger::builder()
    ///     .name("worker")
    ///     .verbosity_floor(3)
    ///     .build()
    ///     .unwrap();
    /// logger.info(1, "startup", "ready", &[]);
    /// ```
    #[must_use]
    pub fn builder() -> LoggerBuilder {
        LoggerBuilder::new()
    }

    /// Construct a logger from a declarative configuration document.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        LoggerBuilder::from_config(config)?.build()
    }

    /// The logger identity included in every formatted line.
    pub fn name(&self) -> &str {
        self.formatter.name()
    }

    pub fn verbosity_floor(&self) -> i32 {
        self.verbosity_floor
    }

    /// Whether a call at `level` would produce output.
    ///
    /// Exposed so call sites (and the logging macros) can skip building
    /// expensive messages for suppressed calls.
    #[inline]
    pub fn enabled(&self, level: i32) -> bool {
        level <= self.verbosity_floor
    }

    /// Gate, format, and dispatch one logging call.
    ///
    /// `caller` is the name of the invoking function; the severity macros
    /// capture it automatically. A suppressed call pays no formatting or
    /// allocation cost. Sink write failures are reported on stderr and
    /// counted, never propagated: logging must not fail the instrumented
    /// program.
    pub fn log(
        &self,
        severity: Severity,
        level: i32,
        caller: &str,
        message: &str,
        args: &[&dyn fmt::Display],
    ) {
        if !self.enabled(level) {
            self.metrics.record_suppressed();
            return;
        }
        if self.closed.load(Ordering::Acquire) {
            return;
        }

        let record = LogRecord::new(severity, level, caller, message, args);

        let mut sinks = self.sinks.lock();
        for sink in sinks.iter_mut() {
            if let Err(e) = sink.write(&record, &self.formatter) {
                self.metrics.record_write_failure();
                eprintln!("[dbglog] sink '{}' write failed: {}", sink.name(), e);
            }
        }
        self.metrics.record_emitted();
    }

    #[inline]
    pub fn debug(&self, level: i32, caller: &str, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Severity::Debug, level, caller, message, args);
    }

    #[inline]
    pub fn info(&self, level: i32, caller: &str, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Severity::Info, level, caller, message, args);
    }

    #[inline]
    pub fn warning(&self, level: i32, caller: &str, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Severity::Warning, level, caller, message, args);
    }

    #[inline]
    pub fn error(&self, level: i32, caller: &str, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Severity::Error, level, caller, message, args);
    }

    #[inline]
    pub fn critical(&self, level: i32, caller: &str, message: &str, args: &[&dyn fmt::Display]) {
        self.log(Severity::Critical, level, caller, message, args);
    }

    /// Flush every sink, propagating the first error.
    pub fn flush(&self) -> Result<()> {
        let mut sinks = self.sinks.lock();
        for sink in sinks.iter_mut() {
            sink.flush()?;
        }
        Ok(())
    }

    /// Logger metrics for observability
    pub fn metrics(&self) -> &LoggerMetrics {
        &self.metrics
    }

    /// Release every sink acquired at construction.
    ///
    /// Idempotent: the first call flushes and closes each sink and empties
    /// the sink list; repeated calls return `Ok(())` silently. The first
    /// call attempts every sink and returns the first error encountered.
    /// Logging after close is a silent no-op.
    pub fn close(&self) -> Result<()> {
        if self.closed.swap(true, Ordering::AcqRel) {
            return Ok(());
        }

        let mut sinks = self.sinks.lock();
        let mut first_err = None;
        for sink in sinks.iter_mut() {
            let result = sink.flush().and_then(|()| sink.close());
            if let Err(e) = result {
                if first_err.is_none() {
                    first_err = Some(e);
                }
            }
        }
        sinks.clear();

        match first_err {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }
}

impl Drop for Logger {
    fn drop(&mut self) {
        // Teardown on every exit path; drop must not panic or propagate.
        if let Err(e) = self.close() {
            eprintln!("[dbglog] sink teardown failed: {}", e);
        }
    }
}

impl fmt::Debug for Logger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Logger")
            .field("name", &self.name())
            .field("verbosity_floor", &self.verbosity_floor)
            .field("sinks", &self.sinks.lock().len())
            .field("closed", &self.closed.load(Ordering::Relaxed))
            .finish()
    }
}

/// Builder for constructing a [`Logger`] with a fluent API
///
/// Each option is independently toggled; enabled sinks are attached in a
/// fixed order (stderr, stdout, syslog, file, custom) and share one
/// formatter. Any sink attachment failure propagates from
/// [`build`](LoggerBuilder::build); there is no partial-success mode.
///
/// # Example
/// ```no_run
/// use dbglog::Logger;
///
/// let logger = Logger::builder()
///     .name("relay")
///     .verbosity_floor(3)
///     .to_stdout(true)
///     .to_stderr(false)
///     .to_file("/var/log/relay.log")
///     .build()
///     .unwrap();
/// ```
pub struct LoggerBuilder {
    name: String,
    verbosity_floor: i32,
    to_stdout: bool,
    to_stderr: bool,
    to_syslog: bool,
    #[cfg(unix)]
    syslog_facility: Facility,
    to_file: Option<PathBuf>,
    custom_sink: Option<Box<dyn Sink>>,
    print_level: bool,
    timestamp_format: TimestampFormat,
}

impl LoggerBuilder {
    /// Create a new builder with default values
    pub fn new() -> Self {
        Self {
            name: "dbglog".to_string(),
            verbosity_floor: 0,
            to_stdout: false,
            to_stderr: true,
            to_syslog: false,
            #[cfg(unix)]
            syslog_facility: Facility::Daemon,
            to_file: None,
            custom_sink: None,
            print_level: true,
            timestamp_format: TimestampFormat::default(),
        }
    }

    /// Populate a builder from a declarative configuration document.
    pub fn from_config(config: &LoggerConfig) -> Result<Self> {
        let mut builder = Self::new()
            .name(config.name.clone())
            .verbosity_floor(config.verbosity_floor)
            .to_stdout(config.to_stdout)
            .to_stderr(config.to_stderr)
            .to_syslog(config.to_syslog)
            .print_level(config.print_level)
            .timestamp_format(config.timestamp_format.clone());

        #[cfg(unix)]
        {
            builder.syslog_facility = Facility::from_name(&config.syslog_facility)
                .ok_or_else(|| {
                    LogError::config(
                        "syslog_facility",
                        format!("unknown facility '{}'", config.syslog_facility),
                    )
                })?;
        }

        if let Some(ref path) = config.to_file {
            builder = builder.to_file(path.clone());
        }
        Ok(builder)
    }

    /// Set the logger identity (also used as the syslog tag).
    #[must_use = "builder methods return a new value"]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Set the verbosity floor. Calls with `level` above it produce no
    /// output. Default 0.
    #[must_use = "builder methods return a new value"]
    pub fn verbosity_floor(mut self, floor: i32) -> Self {
        self.verbosity_floor = floor;
        self
    }

    /// Attach a sink writing to standard output. Default false.
    #[must_use = "builder methods return a new value"]
    pub fn to_stdout(mut self, enable: bool) -> Self {
        self.to_stdout = enable;
        self
    }

    /// Attach a sink writing to standard error. Default true.
    #[must_use = "builder methods return a new value"]
    pub fn to_stderr(mut self, enable: bool) -> Self {
        self.to_stderr = enable;
        self
    }

    /// Attach a sink writing to the platform system log. Default false.
    ///
    /// Connects directly to the well-known log socket when it exists,
    /// otherwise falls back to `syslog(3)`. Unix only; on other platforms
    /// `build` rejects the configuration.
    #[must_use = "builder methods return a new value"]
    pub fn to_syslog(mut self, enable: bool) -> Self {
        self.to_syslog = enable;
        self
    }

    /// Set the syslog facility. Default `daemon`.
    #[cfg(unix)]
    #[must_use = "builder methods return a new value"]
    pub fn syslog_facility(mut self, facility: Facility) -> Self {
        self.syslog_facility = facility;
        self
    }

    /// Attach a sink appending to the given file path.
    #[must_use = "builder methods return a new value"]
    pub fn to_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.to_file = Some(path.into());
        self
    }

    /// Attach one caller-supplied sink. It receives the shared formatter on
    /// every write, so its output matches the built-in sinks.
    #[must_use = "builder methods return a new value"]
    pub fn custom_sink(mut self, sink: Box<dyn Sink>) -> Self {
        self.custom_sink = Some(sink);
        self
    }

    /// Include the severity token in formatted lines. Default true.
    #[must_use = "builder methods return a new value"]
    pub fn print_level(mut self, enable: bool) -> Self {
        self.print_level = enable;
        self
    }

    /// Set the timestamp format shared by all sinks.
    #[must_use = "builder methods return a new value"]
    pub fn timestamp_format(mut self, format: TimestampFormat) -> Self {
        self.timestamp_format = format;
        self
    }

    /// Build the logger, opening every enabled sink.
    pub fn build(self) -> Result<Logger> {
        let formatter = Formatter::new(
            self.name.clone(),
            self.print_level,
            self.timestamp_format,
        )
        .shared();

        let mut sinks: Vec<Box<dyn Sink>> = Vec::new();

        if self.to_stderr {
            sinks.push(Box::new(ConsoleSink::stderr()));
        }
        if self.to_stdout {
            sinks.push(Box::new(ConsoleSink::stdout()));
        }
        if self.to_syslog {
            #[cfg(unix)]
            sinks.push(Box::new(SyslogSink::new(
                self.name.clone(),
                self.syslog_facility,
            )?));
            #[cfg(not(unix))]
            return Err(LogError::config(
                "to_syslog",
                "the syslog sink is only available on unix platforms",
            ));
        }
        if let Some(path) = self.to_file {
            sinks.push(Box::new(FileSink::new(path)?));
        }
        if let Some(sink) = self.custom_sink {
            sinks.push(sink);
        }

        Ok(Logger {
            verbosity_floor: self.verbosity_floor,
            formatter,
            sinks: Mutex::new(sinks),
            closed: AtomicBool::new(false),
            metrics: LoggerMetrics::new(),
        })
    }
}

impl Default for LoggerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
