//! File sink implementation

use crate::core::{Formatter, LogError, LogRecord, Result, Sink};
use std::fs::{File, OpenOptions};
use std::io::{BufWriter, Write};
use std::path::PathBuf;

/// Sink appending rendered lines to a file.
///
/// The file is opened in append mode at construction and held until
/// [`close`](Sink::close), which flushes and releases the handle so other
/// processes can take over the path. Rotation and truncation are out of
/// scope; the file only grows.
pub struct FileSink {
    path: PathBuf,
    writer: Option<BufWriter<File>>,
}

impl FileSink {
    pub fn new(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&path)
            .map_err(|e| LogError::file_sink(path.display().to_string(), e.to_string()))?;

        Ok(Self {
            path,
            writer: Some(BufWriter::new(file)),
        })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

impl Sink for FileSink {
    fn write(&mut self, record: &LogRecord, formatter: &Formatter) -> Result<()> {
        let writer = self
            .writer
            .as_mut()
            .ok_or_else(|| LogError::sink("file writer already closed"))?;

        let mut line = formatter.render(record);
        line.push('\n');
        writer.write_all(line.as_bytes())?;
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        if let Some(ref mut writer) = self.writer {
            writer.flush()?;
        }
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.flush()?;
        // Dropping the BufWriter releases the OS handle.
        self.writer.take();
        Ok(())
    }

    fn name(&self) -> &str {
        "file"
    }
}

impl Drop for FileSink {
    fn drop(&mut self) {
        // Ensure buffered data reaches disk even without an explicit close.
        let _ = self.flush();
    }
}
