//! Error type for backend calls
//!
//! Failures keep the HTTP status as a value so callers can branch on it
//! (403 forces a logout) instead of inspecting message text.

use thiserror::Error;

/// Status the backend answers with when the token is missing, expired or
/// not allowed to touch the resource
pub const FORBIDDEN: u16 = 403;

/// A failed request to the Blog Pessoal backend
#[derive(Debug, Error)]
pub enum ApiError {
    /// The HTTP client could not be built
    #[error("could not build HTTP client: {0}")]
    Setup(#[source] reqwest::Error),

    /// The request never produced a response (DNS, TLS, timeout, ...)
    #[error("request to {path} failed: {source}")]
    Transport {
        /// Backend path that was requested
        path: String,
        /// Underlying client error
        #[source]
        source: reqwest::Error,
    },

    /// The backend answered with a non-success status
    #[error("{path} returned {status}: {body}")]
    Status {
        /// Backend path that was requested
        path: String,
        /// HTTP status code
        status: u16,
        /// Raw response body, possibly empty
        body: String,
    },

    /// The response body was not the expected JSON
    #[error("could not decode response from {path}: {source}")]
    Decode {
        /// Backend path that was requested
        path: String,
        /// Parser error
        #[source]
        source: serde_json::Error,
    },
}

impl ApiError {
    /// Build a status error (handy for fakes in tests)
    pub fn status(path: impl Into<String>, status: u16) -> Self {
        Self::Status {
            path: path.into(),
            status,
            body: String::new(),
        }
    }

    /// HTTP status carried by the error, if the backend answered at all
    pub const fn status_code(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend refused the token
    pub fn is_forbidden(&self) -> bool {
        self.status_code() == Some(FORBIDDEN)
    }
}
