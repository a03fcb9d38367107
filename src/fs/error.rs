//! Filesystem Error Types

use crate::fs::code::StatusCode;

/// Error carried by every failed filesystem operation
///
/// The canonical code is the contract surface; the message exists only for
/// diagnostics and is never used to classify an outcome.
#[derive(Debug, Clone, thiserror::Error)]
#[error("{code}: {message}")]
pub struct FsError {
    code: StatusCode,
    message: String,
}

impl FsError {
    pub fn new(code: StatusCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(StatusCode::NotFound, message)
    }

    pub fn already_exists(message: impl Into<String>) -> Self {
        Self::new(StatusCode::AlreadyExists, message)
    }

    pub fn failed_precondition(message: impl Into<String>) -> Self {
        Self::new(StatusCode::FailedPrecondition, message)
    }

    pub fn unimplemented(message: impl Into<String>) -> Self {
        Self::new(StatusCode::Unimplemented, message)
    }

    pub fn code(&self) -> StatusCode {
        self.code
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

impl From<std::io::Error> for FsError {
    fn from(err: std::io::Error) -> Self {
        Self::new(StatusCode::from_io_kind(err.kind()), err.to_string())
    }
}

/// Result type for filesystem operations
pub type FsResult<T> = Result<T, FsError>;
