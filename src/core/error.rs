//! Error types for the logging facility

use super::severity::Severity;

pub type Result<T> = std::result::Result<T, LoggerError>;

#[derive(Debug, thiserror::Error)]
pub enum LoggerError {
    /// Generic IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Log file acquisition exhausted its retry budget
    #[error("could not acquire log file '{path}' after {attempts} attempts")]
    FileAcquisition { path: String, attempts: usize },

    /// No console color mapped for a severity (configuration mistake)
    #[error("no console color mapped for severity {severity}")]
    UnmappedSeverity { severity: Severity },
}

impl LoggerError {
    /// Create a file acquisition error
    pub fn file_acquisition(path: impl Into<String>, attempts: usize) -> Self {
        LoggerError::FileAcquisition {
            path: path.into(),
            attempts,
        }
    }

    /// Create an unmapped severity error
    pub fn unmapped_severity(severity: Severity) -> Self {
        LoggerError::UnmappedSeverity { severity }
    }
}
