//! Log record structure

use super::caller::CallerTag;
use super::severity::Severity;
use chrono::{DateTime, Local};
use std::fmt;

/// A single log event, built per emission call once the threshold check has
/// passed, consumed by the formatter, then discarded.
#[derive(Debug, Clone)]
pub struct LogRecord {
    pub timestamp: DateTime<Local>,
    pub severity: Severity,
    pub caller: CallerTag,
    pub parts: Vec<String>,
}

impl LogRecord {
    pub fn new<I>(severity: Severity, caller: CallerTag, parts: I) -> Self
    where
        I: IntoIterator,
        I::Item: fmt::Display,
    {
        Self {
            timestamp: Local::now(),
            severity,
            caller,
            parts: parts.into_iter().map(|part| part.to_string()).collect(),
        }
    }

    /// Message parts joined with single spaces. Content passes through
    /// verbatim; embedded newlines or brackets are not escaped.
    pub fn message(&self) -> String {
        self.parts.join(" ")
    }
}
