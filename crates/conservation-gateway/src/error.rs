//! Error types for the conservation gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde_json::json;
use std::fmt;

#[derive(Debug)]
pub enum GatewayError {
    /// Red List API call failed
    Remote(redlist_api::RemoteApiError),
    /// Invalid request parameters
    BadRequest(String),
    /// Configuration error
    Config(String),
}

impl fmt::Display for GatewayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Remote(e) => write!(f, "{}", e),
            Self::BadRequest(msg) => write!(f, "Bad request: {}", msg),
            Self::Config(msg) => write!(f, "Configuration error: {}", msg),
        }
    }
}

impl std::error::Error for GatewayError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Remote(e) => Some(e),
            Self::BadRequest(_) | Self::Config(_) => None,
        }
    }
}

impl From<redlist_api::RemoteApiError> for GatewayError {
    fn from(e: redlist_api::RemoteApiError) -> Self {
        Self::Remote(e)
    }
}

impl From<tracing_subscriber::filter::ParseError> for GatewayError {
    fn from(e: tracing_subscriber::filter::ParseError) -> Self {
        Self::Config(e.to_string())
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::Remote(e) => {
                tracing::error!(error = %e, "Red List request failed");
                (StatusCode::BAD_GATEWAY, "Upstream request failed".to_string())
            }
            Self::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            Self::Config(msg) => {
                tracing::error!(error = %msg, "Configuration error");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Internal server error".to_string(),
                )
            }
        };

        (status, axum::Json(json!({ "error": message }))).into_response()
    }
}

pub type Result<T> = std::result::Result<T, GatewayError>;
