//! Error types for the onboarding engine.
//!
//! Nothing here is fatal to a host process: validation failures are data
//! (per-field messages on the session), and every error variant resolves to a
//! state the user can act on — fix a field, retry the request, or abandon the
//! session.

/// Top-level error type for the engine.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Session error: {0}")]
    Session(#[from] SessionError),

    #[error("Profile error: {0}")]
    Profile(#[from] ProfileError),

    #[error("Submission error: {0}")]
    Submission(#[from] SubmissionError),
}

/// Errors from mutating a wizard session.
#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("Unknown field key: {0}")]
    UnknownKey(String),

    #[error("Wrong value shape for field {key}: expected {expected}")]
    KindMismatch { key: String, expected: &'static str },
}

/// Errors from the remote profile collaborator (read or write).
///
/// A load failure is surfaced, never swallowed: the wizard must not start
/// with empty prefill when a profile is known to exist.
#[derive(Debug, thiserror::Error)]
pub enum ProfileError {
    #[error("Profile request failed: {0}")]
    Http(String),

    #[error("Profile endpoint returned {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode profile response: {0}")]
    Decode(String),
}

/// Errors from the final submission.
///
/// All variants are retryable by calling submit again; the session's
/// in-progress values are preserved verbatim across a failed attempt.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    #[error("Cannot submit before reaching the final step")]
    NotOnFinalStep,

    #[error("Step {step_id} is incomplete")]
    Incomplete { step_id: String },

    #[error("Profile update failed: {0}")]
    Api(#[from] ProfileError),
}

/// Result type alias for the engine.
pub type Result<T> = std::result::Result<T, Error>;
