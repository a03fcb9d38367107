//! Harness Error Types

use std::path::PathBuf;

/// Result type alias for harness operations
pub type HarnessResult<T> = std::result::Result<T, HarnessError>;

/// Errors raised by the harness itself, as opposed to backend outcomes
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    /// The isolated working directory could not be prepared
    #[error("Cannot create working directory {path}: {source}")]
    WorkdirCreate {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The JSON report could not be written
    #[error("Failed to write report to {path}: {cause}")]
    ReportWrite { path: PathBuf, cause: String },
}

impl crate::core::error_handling::ContextualError for HarnessError {
    fn is_user_actionable(&self) -> bool {
        match self {
            // Working directories are environment trouble, not user input
            HarnessError::WorkdirCreate { .. } => false,
            HarnessError::ReportWrite { .. } => true,
        }
    }

    fn user_message(&self) -> Option<String> {
        match self {
            HarnessError::ReportWrite { path, cause } => Some(format!(
                "cannot write the report to '{}': {}",
                path.display(),
                cause
            )),
            _ => None,
        }
    }
}
