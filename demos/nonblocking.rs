//! Non-blocking hand-off example
//!
//! Demonstrates fire-and-forget logging from plain threads, plus the
//! process-wide shared instance.
//!
//! Run with: cargo run --example nonblocking

use log_funnel::prelude::*;
use log_funnel::{call_site, info};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

fn main() {
    println!("=== Log Funnel - Non-blocking Example ===\n");

    let logger = Arc::new(Logger::builder().sink(ConsoleSink::new()).build());

    let handles: Vec<_> = (0..4)
        .map(|worker| {
            let logger = Arc::clone(&logger);
            thread::spawn(move || {
                for i in 0..5 {
                    info!(logger, "worker {} message {}", worker, i);
                }
            })
        })
        .collect();

    for handle in handles {
        handle.join().unwrap();
    }

    // Give the dispatch worker a moment to drain the queue.
    thread::sleep(Duration::from_millis(200));
    println!("\nDispatched {} records.", logger.dispatched_count());

    // The shared instance targets the `log` facade; without a backend
    // installed these calls are no-ops, but always safe.
    Logger::shared().log_default("shutting down", call_site!());

    println!("\n=== Example completed successfully! ===");
}
