//! Generic error handling utilities
//!
//! Unified error logging that distinguishes user-actionable errors (show the
//! specific message) from system errors (show generic context, keep detail at
//! debug level).

/// Trait for errors that can distinguish user-actionable from system errors
///
/// When `is_user_actionable()` returns true, `user_message()` must return a
/// specific, fixable message; when it returns false, `user_message()` must
/// return None.
pub trait ContextualError: std::error::Error {
    /// True if the user can act on this error directly (bad argument,
    /// missing module, unwritable report path)
    fn is_user_actionable(&self) -> bool;

    /// The specific message to show for a user-actionable error
    fn user_message(&self) -> Option<String>;
}

/// Log an error with detail level matched to its specificity
pub fn log_error_with_context<E>(error: &E, operation_context: &str)
where
    E: ContextualError + std::fmt::Display + std::fmt::Debug,
{
    match error.user_message() {
        Some(user_msg) if error.is_user_actionable() => {
            log::error!("{}: {}", operation_context, user_msg);
        }
        _ => {
            log::error!("{} failed: {}", operation_context, error);
        }
    }
    log::debug!("{} error detail: {:?}", operation_context, error);
}
