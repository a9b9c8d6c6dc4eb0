//! Sink implementations

pub mod console;
pub mod file;

pub use console::{ConsoleSink, OutputFn};
pub use file::{FileSink, DEFAULT_FLUSH_INTERVAL};
