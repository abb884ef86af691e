//! Sink implementations

pub mod log_facade;

#[cfg(feature = "console")]
pub mod console;

pub use log_facade::LogFacadeSink;

#[cfg(feature = "console")]
pub use console::ConsoleSink;

// Re-export the trait so sink authors need only this module
pub use crate::core::Sink;
