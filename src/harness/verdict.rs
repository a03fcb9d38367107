//! Verdict logic
//!
//! The defining rule of this harness: every scenario asserts an expected
//! canonical code but accepts UNIMPLEMENTED as an equally valid outcome,
//! because a backend that does not implement an operation at all is not a
//! backend that behaves incorrectly.

use crate::fs::api::{FsResult, StatusCode};
use serde::Serialize;

/// Outcome of one (scenario, scheme) execution
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum Verdict {
    Pass,
    /// Scenario inapplicable: missing backend, unsupported setup operation,
    /// or an environment problem preparing the working directory
    Skip { reason: String },
    /// Observed code is neither the expected code nor UNIMPLEMENTED
    Fail { reason: String },
}

impl Verdict {
    pub fn skip(reason: impl Into<String>) -> Self {
        Verdict::Skip {
            reason: reason.into(),
        }
    }

    pub fn fail(reason: impl Into<String>) -> Self {
        Verdict::Fail {
            reason: reason.into(),
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, Verdict::Pass)
    }

    pub fn is_skip(&self) -> bool {
        matches!(self, Verdict::Skip { .. })
    }

    pub fn is_fail(&self) -> bool {
        matches!(self, Verdict::Fail { .. })
    }
}

/// Whether an observed code satisfies an expectation
pub fn unimplemented_or(expected: StatusCode, observed: StatusCode) -> bool {
    observed == StatusCode::Unimplemented || observed == expected
}

/// Judge an operation result against the expected code
///
/// `operation` names the call under test so a Fail reads as a complete
/// sentence: which operation, which code was expected, which was observed.
pub fn expect_code<T>(operation: &str, expected: StatusCode, result: &FsResult<T>) -> Verdict {
    let observed = StatusCode::of(result);
    if unimplemented_or(expected, observed) {
        return Verdict::Pass;
    }

    let detail = match result {
        Ok(_) => String::new(),
        Err(e) => format!(" ({})", e.message()),
    };
    Verdict::fail(format!(
        "{}: expected {}, observed {}{}",
        operation, expected, observed, detail
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fs::api::FsError;

    #[test]
    fn test_expected_code_passes() {
        assert!(unimplemented_or(StatusCode::NotFound, StatusCode::NotFound));
    }

    #[test]
    fn test_unimplemented_substitutes_for_any_expectation() {
        assert!(unimplemented_or(StatusCode::NotFound, StatusCode::Unimplemented));
        assert!(unimplemented_or(StatusCode::Ok, StatusCode::Unimplemented));
        assert!(unimplemented_or(
            StatusCode::AlreadyExists,
            StatusCode::Unimplemented
        ));
    }

    #[test]
    fn test_other_codes_fail() {
        assert!(!unimplemented_or(
            StatusCode::NotFound,
            StatusCode::FailedPrecondition
        ));
        assert!(!unimplemented_or(StatusCode::Ok, StatusCode::NotFound));
    }

    #[test]
    fn test_expect_code_verdicts() {
        let not_found: FsResult<()> = Err(FsError::not_found("missing"));
        let unimplemented: FsResult<()> = Err(FsError::unimplemented("nope"));
        let precondition: FsResult<()> = Err(FsError::failed_precondition("dir"));

        assert!(expect_code("op", StatusCode::NotFound, &not_found).is_pass());
        assert!(expect_code("op", StatusCode::NotFound, &unimplemented).is_pass());
        assert!(expect_code("op", StatusCode::NotFound, &precondition).is_fail());
    }

    #[test]
    fn test_fail_reason_names_both_codes() {
        let observed: FsResult<()> = Err(FsError::failed_precondition("is a directory"));
        let verdict = expect_code("new_random_access_file", StatusCode::NotFound, &observed);

        match verdict {
            Verdict::Fail { reason } => {
                assert!(reason.contains("new_random_access_file"));
                assert!(reason.contains("NOT_FOUND"));
                assert!(reason.contains("FAILED_PRECONDITION"));
            }
            other => panic!("expected Fail, got {:?}", other),
        }
    }

    #[test]
    fn test_ok_observed_when_error_expected_fails() {
        let ok: FsResult<()> = Ok(());
        let verdict = expect_code("create_directory", StatusCode::AlreadyExists, &ok);
        assert!(verdict.is_fail());
    }
}
