//! Logging macros for ergonomic message formatting.
//!
//! The leveled methods take message *parts* joined with spaces; these macros
//! cover the other common shape, a `format!`-style call.
//!
//! # Examples
//!
//! ```
//! use plainlog::prelude::*;
//! use plainlog::info;
//!
//! let logger = Logger::new("app");
//!
//! let port = 8080;
//! info!(logger, "Server listening on port {}", port);
//! ```

/// Log a message at an explicit severity with automatic formatting.
///
/// # Examples
///
/// ```
/// # use plainlog::prelude::*;
/// # let logger = Logger::new("app");
/// use plainlog::log;
/// log!(logger, Severity::Info, "Simple message");
/// log!(logger, Severity::Error, "Error code: {}", 500);
/// ```
#[macro_export]
macro_rules! log {
    ($logger:expr, $severity:expr, $($arg:tt)+) => {
        $logger.log($severity, [format!($($arg)+)])
    };
}

/// Log a trace-severity message.
#[macro_export]
macro_rules! trace {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Trace, $($arg)+)
    };
}

/// Log a debug-severity message.
#[macro_export]
macro_rules! debug {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Debug, $($arg)+)
    };
}

/// Log an info-severity message.
///
/// # Examples
///
/// ```
/// # use plainlog::prelude::*;
/// # let logger = Logger::new("app");
/// use plainlog::info;
/// info!(logger, "Processing {} items", 100);
/// ```
#[macro_export]
macro_rules! info {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Info, $($arg)+)
    };
}

/// Log a warning-severity message.
#[macro_export]
macro_rules! warn {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Warning, $($arg)+)
    };
}

/// Log an error-severity message.
#[macro_export]
macro_rules! error {
    ($logger:expr, $($arg:tt)+) => {
        $crate::log!($logger, $crate::Severity::Error, $($arg)+)
    };
}

/// Log a fatal error and terminate the process with status 1.
///
/// # Examples
///
/// ```no_run
/// # use plainlog::prelude::*;
/// # let logger = Logger::new("app");
/// use plainlog::fatal;
/// fatal!(logger, "unable to recover: {}", "disk full");
/// ```
#[macro_export]
macro_rules! fatal {
    ($logger:expr, $($arg:tt)+) => {
        $logger.fatal(format!($($arg)+))
    };
}

#[cfg(test)]
mod tests {
    use crate::core::{Logger, Severity};

    #[test]
    fn test_log_macro() {
        let logger = Logger::new("macros");
        log!(logger, Severity::Info, "Test message");
        log!(logger, Severity::Info, "Formatted: {}", 42);
    }

    #[test]
    fn test_leveled_macros() {
        let logger = Logger::new("macros");
        trace!(logger, "Trace message");
        debug!(logger, "Count: {}", 5);
        info!(logger, "Items: {}", 100);
        warn!(logger, "Retry {} of {}", 1, 3);
        error!(logger, "Code: {}", 500);
    }
}
