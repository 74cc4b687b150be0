//! Error types for the Red List API client

use std::fmt;

/// Errors that can occur when calling the upstream conservation data API
#[derive(Debug)]
pub enum RemoteApiError {
    /// Request could not be sent or the connection failed
    Http(reqwest::Error),
    /// Upstream answered with a non-success status
    Status {
        status: reqwest::StatusCode,
        /// Request path, without the token query string
        path: String,
    },
    /// Failed to decode the JSON payload
    Json(serde_json::Error),
}

impl fmt::Display for RemoteApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Http(e) => write!(f, "Red List HTTP error: {}", e),
            Self::Status { status, path } => {
                write!(f, "Red List returned status {} for {}", status, path)
            }
            Self::Json(e) => write!(f, "Red List JSON parse error: {}", e),
        }
    }
}

impl std::error::Error for RemoteApiError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Http(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Status { .. } => None,
        }
    }
}

impl From<reqwest::Error> for RemoteApiError {
    fn from(e: reqwest::Error) -> Self {
        // The request URL carries the access token
        Self::Http(e.without_url())
    }
}

impl From<serde_json::Error> for RemoteApiError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Result type for Red List API operations
pub type Result<T> = std::result::Result<T, RemoteApiError>;
