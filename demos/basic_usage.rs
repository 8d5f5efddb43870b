//! Basic usage example
//!
//! Demonstrates verbosity gating, the severity macros, and caller capture.
//!
//! Run with: cargo run --example basic_usage

use dbglog::{critical, debug, info, warning, Logger, Result};

fn connect(logger: &Logger) {
    info!(logger, 1, "connection established to", "10.0.0.7:5432");
    debug!(logger, 4, "handshake took", 12, "ms");
}

fn main() -> Result<()> {
    println!("=== dbglog - Basic Usage Example ===\n");

    // Floor 3: calls at level 3 or below are emitted, everything above is
    // silently discarded before any formatting work.
    let logger = Logger::builder()
        .name("example")
        .verbosity_floor(3)
        .build()?;

    println!("1. Levels at or below the floor appear:");
    debug!(logger, 2, "this level 2 message appears; floor =", logger.verbosity_floor());
    debug!(logger, 4, "this level 4 message is suppressed");

    println!("\n2. Severity categorizes but never gates:");
    critical!(logger, 9, "critical but too verbose - suppressed");
    warning!(logger, 0, "warning at level 0 - emitted");

    println!("\n3. The caller name is captured per call site:");
    connect(&logger);

    println!(
        "\nemitted: {}, suppressed: {}",
        logger.metrics().emitted(),
        logger.metrics().suppressed()
    );

    logger.close()?;
    println!("\n=== Example completed successfully! ===");
    Ok(())
}
