//! Core logger types

pub mod caller;
pub mod error;
pub mod formatter;
pub mod logger;
pub mod record;
pub mod severity;

pub use caller::{CallerCapture, CallerTag, DisabledCaller};
pub use error::{LoggerError, Result};
pub use formatter::{Formatter, TimeFormat};
pub use logger::{FatalHook, Logger, LoggerBuilder};
pub use record::LogRecord;
pub use severity::Severity;
