//! Error types for the analysis service client.
//!
//! Two failure families cross the service boundary: the service answered
//! with a non-success status ([`ApiError::Service`]), or the exchange never
//! produced a usable response ([`ApiError::Transport`]). A success body that
//! fails to parse counts as transport, not as a distinct error kind.

use thiserror::Error;

/// Errors from the analyze exchange.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The service responded with a non-success status. `message` carries
    /// the response body text, or "Server error" when the body was empty.
    #[error("service error (status {status}): {message}")]
    Service { status: u16, message: String },

    /// The request could not be completed, or the success body failed to
    /// parse as an analysis result.
    #[error("transport error: {0}")]
    Transport(String),
}

impl ApiError {
    /// The message surfaced to the user. Service failures show their body
    /// verbatim; everything else collapses to a generic fallback.
    pub fn user_message(&self) -> String {
        match self {
            ApiError::Service { message, .. } => message.clone(),
            ApiError::Transport(_) => "Analysis failed".to_string(),
        }
    }
}

impl From<reqwest::Error> for ApiError {
    fn from(err: reqwest::Error) -> Self {
        ApiError::Transport(err.to_string())
    }
}
