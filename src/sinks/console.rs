//! Console sink implementation

use crate::core::{Formatter, LogRecord, Result, Sink};
use std::io::{self, Write};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Sink writing rendered lines to one of the standard streams.
///
/// Standard output and standard error are independently toggled logger
/// options, so each enabled stream gets its own sink instance.
pub struct ConsoleSink {
    stream: Stream,
    use_colors: bool,
}

impl ConsoleSink {
    /// A sink writing to standard output.
    pub fn stdout() -> Self {
        Self {
            stream: Stream::Stdout,
            use_colors: true,
        }
    }

    /// A sink writing to standard error.
    pub fn stderr() -> Self {
        Self {
            stream: Stream::Stderr,
            use_colors: true,
        }
    }

    /// Enable or disable severity coloring. Colors are suppressed anyway
    /// when the stream is not a terminal.
    #[must_use]
    pub fn with_colors(mut self, use_colors: bool) -> Self {
        self.use_colors = use_colors;
        self
    }

    #[cfg(feature = "console")]
    fn colorize(&self, line: String, record: &LogRecord) -> String {
        use colored::Colorize;
        if self.use_colors {
            line.color(record.severity.color_code()).to_string()
        } else {
            line
        }
    }

    #[cfg(not(feature = "console"))]
    fn colorize(&self, line: String, _record: &LogRecord) -> String {
        line
    }
}

impl Sink for ConsoleSink {
    fn write(&mut self, record: &LogRecord, formatter: &Formatter) -> Result<()> {
        let line = self.colorize(formatter.render(record), record);
        match self.stream {
            Stream::Stdout => writeln!(io::stdout().lock(), "{}", line)?,
            Stream::Stderr => writeln!(io::stderr().lock(), "{}", line)?,
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        match self.stream {
            Stream::Stdout => io::stdout().flush()?,
            Stream::Stderr => io::stderr().flush()?,
        }
        Ok(())
    }

    fn name(&self) -> &str {
        match self.stream {
            Stream::Stdout => "stdout",
            Stream::Stderr => "stderr",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Severity, TimestampFormat};

    #[test]
    fn test_stream_names() {
        assert_eq!(ConsoleSink::stdout().name(), "stdout");
        assert_eq!(ConsoleSink::stderr().name(), "stderr");
    }

    #[test]
    fn test_write_does_not_fail() {
        let mut sink = ConsoleSink::stderr().with_colors(false);
        let formatter = Formatter::new("test", true, TimestampFormat::Unix);
        let record = LogRecord::new(Severity::Info, 0, "test_fn", "hello", &[]);
        assert!(sink.write(&record, &formatter).is_ok());
        assert!(sink.flush().is_ok());
    }
}
