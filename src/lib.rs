//! # Log Funnel
//!
//! A concurrency-safe logging facade that funnels concurrent callers through
//! a single serialized writer.
//!
//! ## Features
//!
//! - **Serialized Dispatch**: at most one format+dispatch cycle at any instant
//! - **Non-blocking Entry Point**: fire-and-forget submission from any thread
//! - **Call-Site Capture**: file, function, and line ride with each message
//! - **Pluggable Sinks**: the `log` facade by default, console or custom sinks

pub mod core;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        format_message, CallSite, LogRecord, Logger, LoggerBuilder, LoggerMetrics, Result,
        SeverityLevel, Sink, SinkError,
    };
    #[cfg(feature = "console")]
    pub use crate::sinks::ConsoleSink;
    pub use crate::sinks::LogFacadeSink;
}

pub use crate::core::{
    format_message, CallSite, LogRecord, Logger, LoggerBuilder, LoggerMetrics, Result,
    SeverityLevel, Sink, SinkError,
};
#[cfg(feature = "console")]
pub use crate::sinks::ConsoleSink;
pub use crate::sinks::LogFacadeSink;
