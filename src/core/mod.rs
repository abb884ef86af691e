//! Core facade types and traits

pub mod call_site;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod metrics;
pub mod record;
pub mod severity;
pub mod sink;

pub use call_site::CallSite;
pub use error::{Result, SinkError};
pub use formatter::format_message;
pub use logger::{Logger, LoggerBuilder};
pub use metrics::LoggerMetrics;
pub use record::LogRecord;
pub use severity::SeverityLevel;
pub use sink::Sink;
