//! File logging example
//!
//! Demonstrates fanning one call out to stderr and an append-mode file,
//! plus explicit teardown releasing the file handle.
//!
//! Run with: cargo run --example file_logging

use dbglog::{info, warning, Logger, Result};

fn main() -> Result<()> {
    let path = std::env::temp_dir().join("dbglog_example.log");
    println!("=== dbglog - File Logging Example ===");
    println!("logging to {}\n", path.display());

    let logger = Logger::builder()
        .name("filedemo")
        .verbosity_floor(2)
        .to_file(&path)
        .build()?;

    info!(logger, 1, "run started");
    warning!(logger, 2, "disk usage at", 91, "percent");
    info!(logger, 3, "suppressed detail line");

    // Releases the file handle; the path is free for other writers.
    logger.close()?;

    let content = std::fs::read_to_string(&path)?;
    println!("file now contains {} line(s):\n{}", content.lines().count(), content);
    Ok(())
}
