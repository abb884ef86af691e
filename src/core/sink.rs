//! Sink trait for formatted log output destinations

use super::{error::Result, severity::SeverityLevel};

/// Destination for one formatted message at one severity level.
///
/// `accept` must not block indefinitely. A returned error is the sink's own
/// report of failure; the logger swallows it, counts it, and never surfaces
/// it to the submitting caller.
pub trait Sink: Send {
    fn accept(&mut self, message: &str, level: SeverityLevel) -> Result<()>;
    fn flush(&mut self) -> Result<()>;
    fn name(&self) -> &str;
}
