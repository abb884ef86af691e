//! Severity level definitions

use serde::{Deserialize, Serialize};
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;

/// Severity of a log submission, ordered from least to most severe.
///
/// The set mirrors structured-logging backends: `Default` is the unmarked
/// level, `Fault` the most severe. Anything unrecognized degrades to
/// `Default` instead of failing; a level can never be the reason a log call
/// errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, Default)]
pub enum SeverityLevel {
    #[default]
    Default = 0,
    Debug = 1,
    Info = 2,
    Error = 3,
    Fault = 4,
}

impl SeverityLevel {
    pub fn to_str(&self) -> &'static str {
        match self {
            SeverityLevel::Default => "DEFAULT",
            SeverityLevel::Debug => "DEBUG",
            SeverityLevel::Info => "INFO",
            SeverityLevel::Error => "ERROR",
            SeverityLevel::Fault => "FAULT",
        }
    }

    /// Convert a raw discriminant back into a level.
    ///
    /// Unknown discriminants fall back to `Default`.
    pub fn from_raw(value: u8) -> Self {
        match value {
            0 => SeverityLevel::Default,
            1 => SeverityLevel::Debug,
            2 => SeverityLevel::Info,
            3 => SeverityLevel::Error,
            4 => SeverityLevel::Fault,
            _ => SeverityLevel::Default,
        }
    }

    #[cfg(feature = "console")]
    pub fn color_code(&self) -> colored::Color {
        use colored::Color::*;
        match self {
            SeverityLevel::Default => White,
            SeverityLevel::Debug => Blue,
            SeverityLevel::Info => Green,
            SeverityLevel::Error => Red,
            SeverityLevel::Fault => BrightRed,
        }
    }
}

impl fmt::Display for SeverityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for SeverityLevel {
    type Err = Infallible;

    /// Parsing is total: unknown names fall back to `Default`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s.to_uppercase().as_str() {
            "DEBUG" => SeverityLevel::Debug,
            "INFO" => SeverityLevel::Info,
            "ERROR" => SeverityLevel::Error,
            "FAULT" | "CRITICAL" => SeverityLevel::Fault,
            _ => SeverityLevel::Default,
        })
    }
}
