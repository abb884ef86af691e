//! Console sink implementation

use crate::core::{Result, SeverityLevel, Sink};
use colored::Colorize;

/// Writes formatted messages to the terminal with a UTC timestamp and a
/// colored level tag. `Error` and `Fault` go to stderr, everything else to
/// stdout.
pub struct ConsoleSink {
    use_colors: bool,
}

impl ConsoleSink {
    pub fn new() -> Self {
        Self { use_colors: true }
    }

    pub fn with_colors(use_colors: bool) -> Self {
        Self { use_colors }
    }
}

impl Default for ConsoleSink {
    fn default() -> Self {
        Self::new()
    }
}

impl Sink for ConsoleSink {
    fn accept(&mut self, message: &str, level: SeverityLevel) -> Result<()> {
        let timestamp = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");

        let level_str = if self.use_colors {
            format!("{:7}", level.to_str())
                .color(level.color_code())
                .to_string()
        } else {
            format!("{:7}", level.to_str())
        };

        let line = format!("[{}] [{}] {}", timestamp, level_str, message);

        match level {
            SeverityLevel::Error | SeverityLevel::Fault => eprintln!("{}", line),
            _ => println!("{}", line),
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<()> {
        use std::io::Write;
        // Flush both streams since we write to both
        std::io::stdout().flush()?;
        std::io::stderr().flush()?;
        Ok(())
    }

    fn name(&self) -> &str {
        "console"
    }
}
