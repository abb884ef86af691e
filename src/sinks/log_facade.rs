//! Default sink adapter over the `log` facade

use crate::core::{Result, SeverityLevel, Sink};

/// Dispatches formatted messages to the process-wide `log` backend using the
/// backend's own leveled calls, prefixed with a bracketed level tag.
/// Messages pass through verbatim: nothing is redacted or truncated.
///
/// Entries carry a `subsystem::category` target so backends can filter per
/// logger identity.
pub struct LogFacadeSink {
    target: String,
}

impl LogFacadeSink {
    pub fn new(subsystem: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            target: format!("{}::{}", subsystem.into(), category.into()),
        }
    }

    /// Identity used when no explicit subsystem/category is supplied: the
    /// running executable's file stem, with this library's name as the
    /// fallback, under the "default" category.
    pub fn with_default_identity() -> Self {
        let subsystem = std::env::current_exe()
            .ok()
            .and_then(|path| path.file_stem().map(|stem| stem.to_string_lossy().into_owned()))
            .unwrap_or_else(|| env!("CARGO_PKG_NAME").to_string());
        Self::new(subsystem, "default")
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl Sink for LogFacadeSink {
    fn accept(&mut self, message: &str, level: SeverityLevel) -> Result<()> {
        let target = self.target.as_str();
        match level {
            SeverityLevel::Debug => log::debug!(target: target, "[DEBUG] {}", message),
            SeverityLevel::Info => log::info!(target: target, "[INFO] {}", message),
            SeverityLevel::Error => log::error!(target: target, "[ERROR] {}", message),
            SeverityLevel::Fault => log::error!(target: target, "[FAULT] {}", message),
            // The unmarked level maps to the generic call, no tag.
            SeverityLevel::Default => {
                log::log!(target: target, log::Level::Info, "{}", message)
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        log::logger().flush();
        Ok(())
    }

    fn name(&self) -> &str {
        "log-facade"
    }
}
