//! Canonical status codes
//!
//! The closed taxonomy every backend operation result maps onto. Verdicts are
//! decided on these codes alone, never on human-readable messages.

use serde::Serialize;
use std::fmt;

use crate::fs::error::FsResult;

/// Canonical classification of a filesystem operation outcome
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum StatusCode {
    Ok,
    NotFound,
    AlreadyExists,
    FailedPrecondition,
    Unimplemented,
    /// Anything outside the closed taxonomy (permission, interrupted, ...)
    Unknown,
}

impl StatusCode {
    /// Classify an operation result, discarding the success value
    pub fn of<T>(result: &FsResult<T>) -> StatusCode {
        match result {
            Ok(_) => StatusCode::Ok,
            Err(e) => e.code(),
        }
    }

    /// Deterministic mapping from `std::io::ErrorKind`
    pub fn from_io_kind(kind: std::io::ErrorKind) -> StatusCode {
        use std::io::ErrorKind;
        match kind {
            ErrorKind::NotFound => StatusCode::NotFound,
            ErrorKind::AlreadyExists => StatusCode::AlreadyExists,
            ErrorKind::IsADirectory
            | ErrorKind::NotADirectory
            | ErrorKind::DirectoryNotEmpty => StatusCode::FailedPrecondition,
            ErrorKind::Unsupported => StatusCode::Unimplemented,
            _ => StatusCode::Unknown,
        }
    }
}

impl fmt::Display for StatusCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            StatusCode::Ok => "OK",
            StatusCode::NotFound => "NOT_FOUND",
            StatusCode::AlreadyExists => "ALREADY_EXISTS",
            StatusCode::FailedPrecondition => "FAILED_PRECONDITION",
            StatusCode::Unimplemented => "UNIMPLEMENTED",
            StatusCode::Unknown => "UNKNOWN",
        };
        write!(f, "{}", name)
    }
}
