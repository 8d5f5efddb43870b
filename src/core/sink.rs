//! Sink trait for log output destinations

use super::{error::Result, formatter::Formatter, record::LogRecord};

/// An output destination registered on a logger.
///
/// Built-in sinks cover the console streams, append-mode files, and the
/// system log; anything else is attached as a caller-supplied
/// `Box<dyn Sink>`. The shared [`Formatter`] is passed into every write so
/// all sinks of one logger emit the same template.
///
/// Sinks accept every severity. Filtering happens once, centrally, at the
/// verbosity gate before a record is ever built.
pub trait Sink: Send + Sync {
    fn write(&mut self, record: &LogRecord, formatter: &Formatter) -> Result<()>;

    fn flush(&mut self) -> Result<()>;

    /// Release the sink's resources. Called exactly once at logger
    /// teardown; after this the sink receives no further writes.
    fn close(&mut self) -> Result<()> {
        self.flush()
    }

    fn name(&self) -> &str;
}
