//! Logging macros that capture call-site metadata.
//!
//! Rust has no caller-default arguments, so these macros are the calling
//! convention that pins file, enclosing function, and line at the call
//! expression before the message ever crosses a thread boundary.
//!
//! # Examples
//!
//! ```
//! use log_funnel::prelude::*;
//! use log_funnel::{info, log};
//!
//! let logger = Logger::builder().build();
//!
//! // Leveled, non-blocking
//! info!(logger, "server started");
//!
//! // Explicit level
//! log!(logger, level: SeverityLevel::Error, "bind failed on port {}", 8080);
//!
//! // Level omitted: the process default severity
//! log!(logger, "unremarkable event");
//! ```

/// Capture the current call site (file, enclosing function, line).
///
/// # Examples
///
/// ```
/// use log_funnel::call_site;
///
/// let site = call_site!();
/// assert!(site.file().ends_with(".rs"));
/// assert!(site.line() > 0);
/// ```
#[macro_export]
macro_rules! call_site {
    () => {
        $crate::CallSite::new(file!(), $crate::__function_name!(), line!())
    };
}

#[doc(hidden)]
#[macro_export]
macro_rules! __function_name {
    () => {{
        fn __marker() {}
        fn type_name_of<T>(_: T) -> &'static str {
            ::std::any::type_name::<T>()
        }
        let name = type_name_of(__marker);
        name.strip_suffix("::__marker").unwrap_or(name)
    }};
}

/// Submit a message on the non-blocking path, capturing the call site.
///
/// The `level:` form mirrors the `log` crate's `target:` syntax; without it
/// the message goes out at the process default severity.
///
/// # Examples
///
/// ```
/// # use log_funnel::prelude::*;
/// # let logger = Logger::builder().build();
/// use log_funnel::log;
/// log!(logger, level: SeverityLevel::Info, "simple message");
/// log!(logger, level: SeverityLevel::Error, "error code: {}", 500);
/// log!(logger, "default-severity message");
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, level: $level:expr, $($arg:tt)+) => {
        $logger.log(format!($($arg)+), $level, $crate::call_site!())
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.log(
            format!($($arg)+),
            $crate::SeverityLevel::Default,
            $crate::call_site!(),
        )
    };
}

/// Submit a message on the blocking path, capturing the call site.
///
/// Returns once the sink has seen the message.
///
/// # Examples
///
/// ```
/// # use log_funnel::prelude::*;
/// # let logger = Logger::builder().build();
/// use log_funnel::submit;
/// submit!(logger, level: SeverityLevel::Fault, "unrecoverable: {}", "disk full");
/// submit!(logger, "default-severity message, delivered before this returns");
/// ```
#[macro_export]
macro_rules! submit {
    ($logger:expr, level: $level:expr, $($arg:tt)+) => {
        $logger.submit(format!($($arg)+), $level, $crate::call_site!())
    };
    ($logger:expr, $($arg:tt)+) => {
        $logger.submit(
            format!($($arg)+),
            $crate::SeverityLevel::Default,
            $crate::call_site!(),
        )
    };
}

/// Log a debug-level message on the non-blocking path.
///
/// # Examples
///
/// ```
/// # use log_funnel::prelude::*;
/// # let logger = Logger::builder().build();
/// use log_funnel::debug;
/// debug!(logger, "counter value: {}", 10);
/// ```
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, level: $crate::SeverityLevel::Debug, $($arg)+)
    };
}

/// Log an info-level message on the non-blocking path.
///
/// # Examples
///
/// ```
/// # use log_funnel::prelude::*;
/// # let logger = Logger::builder().build();
/// use log_funnel::info;
/// info!(logger, "processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, level: $crate::SeverityLevel::Info, $($arg)+)
    };
}

/// Log an error-level message on the non-blocking path.
///
/// # Examples
///
/// ```
/// # use log_funnel::prelude::*;
/// # let logger = Logger::builder().build();
/// use log_funnel::error;
/// error!(logger, "code: {}, message: {}", 500, "internal error");
/// ```
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, level: $crate::SeverityLevel::Error, $($arg)+)
    };
}

/// Log a fault-level message on the non-blocking path.
///
/// # Examples
///
/// ```
/// # use log_funnel::prelude::*;
/// # let logger = Logger::builder().build();
/// use log_funnel::fault;
/// fault!(logger, "unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fault {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, level: $crate::SeverityLevel::Fault, $($arg)+)
    };
}
