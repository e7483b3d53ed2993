//! Failure taxonomy for remote API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure ends up as one display string via [`ApiError::user_message`].
//! Only `Unauthorized` changes app state: callers clear the session on it.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

use super::types::ErrorBody;

/// Maximum length of a response body echoed into an error.
const MAX_ERROR_BODY_CHARS: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Transport(String),

    #[error("unauthorized")]
    Unauthorized { message: Option<String> },

    #[error("request rejected ({status}): {message}")]
    Rejected { status: u16, message: String },

    #[error("invalid response: {0}")]
    Malformed(String),

    #[error("not available on server")]
    Unavailable,
}

impl ApiError {
    /// Classify a non-2xx response.
    pub fn from_status(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<ErrorBody>(body).ok().and_then(|b| b.message());
        match (status, message) {
            (401, message) => Self::Unauthorized { message },
            (_, Some(message)) => Self::Rejected { status, message },
            (_, None) => Self::Malformed(format!("status {status}: {}", truncate_body(body))),
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Unauthorized { .. })
    }

    /// Text shown to the user: the server's message when it sent one,
    /// otherwise `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        match self {
            Self::Rejected { message, .. } | Self::Unauthorized { message: Some(message) } => message.clone(),
            _ => fallback.to_owned(),
        }
    }
}

fn truncate_body(body: &str) -> String {
    let mut chars = body.chars();
    let head: String = chars.by_ref().take(MAX_ERROR_BODY_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}... (truncated)")
    } else {
        head
    }
}
