//! User-facing failures.
//!
//! A [`Failure`] is what the view layer shows in its error state: a tagged
//! [`FailureReason`] for diagnostics plus the human-readable message. Failures
//! are transient and never retried automatically.

use http::StatusCode;
use thiserror::Error;

/// Why an operation failed.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FailureReason {
    /// The request never produced an HTTP exchange, or the body was not the
    /// expected JSON.
    #[error("network error")]
    NetworkError,

    /// The catalog answered with a non-2xx status.
    #[error("bad status {code} {status_text}")]
    BadStatus { code: u16, status_text: String },

    /// The catalog answered with a well-formed, empty result set.
    #[error("empty result")]
    EmptyResult,

    /// A detail facet or a set of cards could not be produced.
    #[error("render error")]
    RenderError,
}

/// A failure surfaced to the view state machine.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct Failure {
    pub reason: FailureReason,
    pub message: String,
}

impl Failure {
    #[must_use]
    pub fn new(reason: FailureReason, message: impl Into<String>) -> Self {
        Self {
            reason,
            message: message.into(),
        }
    }

    #[must_use]
    pub fn network(message: impl Into<String>) -> Self {
        Self::new(FailureReason::NetworkError, message)
    }

    /// A non-2xx reply. The message follows the `Error: 404 - Not Found` form.
    ///
    /// # Examples
    ///
    /// ```
    /// use character_finder::domain::{Failure, FailureReason};
    ///
    /// let failure = Failure::bad_status(503);
    /// assert_eq!(failure.message, "Error: 503 - Service Unavailable");
    /// assert!(matches!(failure.reason, FailureReason::BadStatus { code: 503, .. }));
    /// ```
    #[must_use]
    pub fn bad_status(code: u16) -> Self {
        let status_text = status_text(code).to_string();
        let message = format!("Error: {code} - {status_text}");
        Self::new(FailureReason::BadStatus { code, status_text }, message)
    }

    #[must_use]
    pub fn empty_result(message: impl Into<String>) -> Self {
        Self::new(FailureReason::EmptyResult, message)
    }

    #[must_use]
    pub fn render(message: impl Into<String>) -> Self {
        Self::new(FailureReason::RenderError, message)
    }

    /// Keeps the reason, replaces the message with a user-facing one.
    #[must_use]
    pub fn with_message(self, message: impl Into<String>) -> Self {
        Self::new(self.reason, message)
    }
}

/// Canonical reason phrase for `code`, or an empty string when the code has
/// none.
///
/// The host only reports the numeric status.
#[must_use]
pub fn status_text(code: u16) -> &'static str {
    StatusCode::from_u16(code)
        .ok()
        .and_then(|status| status.canonical_reason())
        .unwrap_or_default()
}
