//! Severity level definitions

use std::fmt;
use std::str::FromStr;

/// Leveled importance of a log record, used for filtering.
///
/// A record is emitted only when its severity is at or above the active
/// threshold, so filtering relies on the declared order below. Note that
/// `Warning` ranks *below* `Info` in this scale; the order is inherited and
/// existing thresholds depend on it, so it must not be rearranged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Severity {
    #[default]
    Trace = 0,
    Debug = 1,
    Warning = 2,
    Info = 3,
    Error = 4,
}

impl Severity {
    pub fn to_str(&self) -> &'static str {
        match self {
            Severity::Trace => "TRACE",
            Severity::Debug => "DEBUG",
            Severity::Warning => "WARNING",
            Severity::Info => "INFO",
            Severity::Error => "ERROR",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_str())
    }
}

impl FromStr for Severity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "TRACE" => Ok(Severity::Trace),
            "DEBUG" => Ok(Severity::Debug),
            "WARN" | "WARNING" => Ok(Severity::Warning),
            "INFO" => Ok(Severity::Info),
            "ERROR" => Ok(Severity::Error),
            _ => Err(format!("Invalid severity: '{}'", s)),
        }
    }
}
