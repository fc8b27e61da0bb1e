//! Failure normalization for the repository client.

use thiserror::Error;

/// Error raised by any repository client operation.
///
/// One type covers transport failures, non-success responses, and malformed
/// payloads; `Display` always yields a human-readable message. These errors
/// are never retried automatically and leave the caller in a consistent,
/// re-editable state.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// The call failed before an HTTP status came back (connection refused,
    /// DNS, ...).
    #[error("network error: {0}")]
    Transport(String),

    /// Non-success response, reported with the operation's generic message.
    #[error("{message}")]
    Status { status: u16, message: &'static str },

    /// Non-success response whose raw body is surfaced to the caller. Only
    /// item creation uses this; it is the one operation where server-side
    /// validation detail reaches the user.
    #[error("{message}: {body}")]
    Rejected {
        status: u16,
        message: &'static str,
        body: String,
    },

    /// The response claimed success but the payload did not decode.
    #[error("parse error: {0}")]
    Parse(String),
}

impl ApiError {
    pub(crate) fn status(status: reqwest::StatusCode, message: &'static str) -> Self {
        Self::Status {
            status: status.as_u16(),
            message,
        }
    }

    /// HTTP status of the failed response, when one was received.
    pub fn http_status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } | ApiError::Rejected { status, .. } => Some(*status),
            ApiError::Transport(_) | ApiError::Parse(_) => None,
        }
    }
}
