//! Custom sink example
//!
//! Demonstrates attaching a caller-supplied sink and building a logger
//! from a declarative JSON configuration.
//!
//! Run with: cargo run --example custom_sink

use dbglog::core::{Formatter, LogRecord, Result, Sink};
use dbglog::{info, warning, Logger, LoggerConfig};
use parking_lot::Mutex;
use std::sync::Arc;

/// A sink keeping the rendered lines in memory.
///
/// It receives the logger's shared formatter on every write, so its lines
/// match what the built-in sinks emit.
struct MemorySink {
    lines: Arc<Mutex<Vec<String>>>,
}

impl Sink for MemorySink {
    fn write(&mut self, record: &LogRecord, formatter: &Formatter) -> Result<()> {
        self.lines.lock().push(formatter.render(record));
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        Ok(())
    }

    fn name(&self) -> &str {
        "memory"
    }
}

fn main() -> Result<()> {
    println!("=== dbglog - Custom Sink Example ===\n");

    let lines = Arc::new(Mutex::new(Vec::new()));
    let logger = Logger::builder()
        .name("capture")
        .verbosity_floor(2)
        .to_stderr(false)
        .custom_sink(Box::new(MemorySink {
            lines: Arc::clone(&lines),
        }))
        .build()?;

    info!(logger, 1, "session opened for", "alice");
    warning!(logger, 2, "quota at", 87, "percent");
    info!(logger, 3, "suppressed detail");
    logger.close()?;

    println!("captured {} line(s):", lines.lock().len());
    for line in lines.lock().iter() {
        println!("  {}", line);
    }

    // The same construction surface, minus custom sinks, as a config file.
    let config = LoggerConfig::from_json(
        r#"{"name": "declarative", "verbosity_floor": 1, "print_level": false}"#,
    )?;
    let logger = Logger::from_config(&config)?;
    info!(logger, 0, "configured logger writes to stderr");
    logger.close()?;

    println!("\n=== Example completed successfully! ===");
    Ok(())
}
