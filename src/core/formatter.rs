//! Line formatting

use super::record::LogRecord;
use chrono::{DateTime, Local};

/// Wall-clock time-of-day rendering for formatted lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TimeFormat {
    /// Long time of day: `14:07:31`.
    #[default]
    LongTime,
    /// Custom strftime-compatible pattern, for locales whose long time
    /// pattern uses different separators.
    Custom(String),
}

impl TimeFormat {
    #[must_use]
    pub fn format(&self, timestamp: &DateTime<Local>) -> String {
        match self {
            TimeFormat::LongTime => timestamp.format("%H:%M:%S").to_string(),
            TimeFormat::Custom(pattern) => timestamp.format(pattern).to_string(),
        }
    }
}

/// Renders a [`LogRecord`] into one line of text.
///
/// Template: `<time> [<SEVERITY>] [<callerTag>]:<joinedMessage>` — no space
/// after the colon. Message content is written verbatim, so a line written to
/// the file sink reads back byte-identical; embedded newlines pass through as
/// literal newlines inside the line.
#[derive(Debug, Clone, Default)]
pub struct Formatter {
    time_format: TimeFormat,
}

impl Formatter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_time_format(mut self, time_format: TimeFormat) -> Self {
        self.time_format = time_format;
        self
    }

    #[must_use]
    pub fn format(&self, record: &LogRecord) -> String {
        format!(
            "{} [{}] [{}]:{}",
            self.time_format.format(&record.timestamp),
            record.severity,
            record.caller,
            record.message()
        )
    }
}
