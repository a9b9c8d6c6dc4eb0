//! # plainlog
//!
//! A lightweight, leveled logging facility with console and file sinks.
//!
//! ## Features
//!
//! - **Leveled Filtering**: Records below the active threshold are dropped
//!   before any formatting cost is paid
//! - **Console Sink**: Severity-colored lines through a swappable output function
//! - **File Sink**: Exclusive log file acquisition with retry-on-conflict and
//!   a periodic background flush
//! - **Thread Safe**: Emission calls may be made from any thread

pub mod core;
pub mod global;
pub mod macros;
pub mod sinks;

pub mod prelude {
    pub use crate::core::{
        CallerCapture, CallerTag, DisabledCaller, FatalHook, Formatter, LogRecord, Logger,
        LoggerBuilder, LoggerError, Result, Severity, TimeFormat,
    };
    pub use crate::sinks::{ConsoleSink, FileSink, OutputFn, DEFAULT_FLUSH_INTERVAL};
}

pub use crate::core::{
    CallerCapture, CallerTag, DisabledCaller, FatalHook, Formatter, LogRecord, Logger,
    LoggerBuilder, LoggerError, Result, Severity, TimeFormat,
};
pub use crate::sinks::{ConsoleSink, FileSink, OutputFn, DEFAULT_FLUSH_INTERVAL};
