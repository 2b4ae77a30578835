//! Error types for the gateway

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

/// Errors that can occur in the gateway
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Upstream request timed out: {0}")]
    Timeout(String),

    #[error("Upstream connection failed: {0}")]
    Connection(String),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GatewayError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            GatewayError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            GatewayError::Connection(_) | GatewayError::Http(_) => StatusCode::BAD_GATEWAY,
            GatewayError::Config(_) | GatewayError::Io(_) | GatewayError::Json(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }

    /// Short machine-readable kind used in JSON error bodies
    pub fn kind(&self) -> &'static str {
        match self {
            GatewayError::Timeout(_) => "timeout",
            GatewayError::Connection(_) => "connection_error",
            GatewayError::Http(_) => "upstream_error",
            GatewayError::Config(_) => "config_error",
            GatewayError::Io(_) => "io_error",
            GatewayError::Json(_) => "json_error",
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = serde_json::json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        (status, Json(body)).into_response()
    }
}

/// Result type alias for gateway operations
pub type Result<T> = std::result::Result<T, GatewayError>;
