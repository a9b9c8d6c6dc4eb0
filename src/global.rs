//! Process-wide shared logger instance
//!
//! Thin forwarding layer over one shared [`Logger`]. [`init`] must be called
//! before any forwarding call; using the accessor earlier is a precondition
//! violation and panics with a clear message instead of dereferencing
//! missing state. Prefer passing a `Logger` (or `Arc<Logger>`) through call
//! sites; this module exists for programs that want the convenience global.

use crate::core::{Logger, Severity};
use parking_lot::RwLock;
use std::fmt;
use std::sync::Arc;

static SHARED: RwLock<Option<Arc<Logger>>> = RwLock::new(None);

/// Install (or replace) the shared logger.
///
/// Replacing drops the previous instance once outstanding handles from
/// [`get`] are gone, which stops its flush timer and releases its log file
/// handle before the new one is used through the accessor.
pub fn init(logger: Logger) {
    *SHARED.write() = Some(Arc::new(logger));
}

/// Handle to the shared logger.
///
/// # Panics
///
/// Panics when called before [`init`].
pub fn get() -> Arc<Logger> {
    SHARED
        .read()
        .clone()
        .expect("shared logger used before plainlog::global::init")
}

/// Handle to the shared logger, or `None` before [`init`].
pub fn try_get() -> Option<Arc<Logger>> {
    SHARED.read().clone()
}

pub fn trace<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    get().trace(parts);
}

pub fn debug<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    get().debug(parts);
}

pub fn info<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    get().info(parts);
}

pub fn warn<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    get().warn(parts);
}

pub fn error<I>(parts: I)
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    get().error(parts);
}

/// Mutate the shared logger's threshold.
pub fn set_level(severity: Severity) {
    get().set_level(severity);
}

/// Forwarding [`Logger::fatal`]: logs, runs the fatal hook, exits the
/// process with status 1. Never returns.
pub fn fatal(error: impl fmt::Display) -> ! {
    get().fatal(error)
}
