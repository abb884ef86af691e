//! Basic facade usage example
//!
//! Demonstrates blocking submissions through the serialized core with the
//! console sink and every severity level.
//!
//! Run with: cargo run --example basic_usage

use log_funnel::prelude::*;
use log_funnel::submit;

fn main() {
    println!("=== Log Funnel - Basic Usage Example ===\n");

    let logger = Logger::builder().sink(ConsoleSink::new()).build();

    println!("1. Blocking submissions at every level:");
    submit!(logger, "a default-level message, no tag");
    submit!(logger, level: SeverityLevel::Debug, "debug details: {}", 42);
    submit!(logger, level: SeverityLevel::Info, "service listening on port {}", 8080);
    submit!(logger, level: SeverityLevel::Error, "request rejected: {}", "bad header");
    submit!(logger, level: SeverityLevel::Fault, "unrecoverable: {}", "disk full");

    println!("\n2. Explicit call-site metadata:");
    logger.submit(
        "constructed by hand",
        SeverityLevel::Info,
        CallSite::new("tooling/generator.rs", "emit", 7),
    );

    println!(
        "\nDispatched {} records, dropped {}.",
        logger.dispatched_count(),
        logger.dropped_count()
    );
    println!("\n=== Example completed successfully! ===");
}
