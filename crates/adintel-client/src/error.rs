//! Error types for the API client

use crate::i18n::{Locale, Message};

/// Errors surfaced by [`crate::ApiClient`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Request timed out")]
    Timeout,

    #[error("HTTP {status}: {message}")]
    Status { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),

    #[error("Invalid input: {0}")]
    Validation(String),
}

impl ApiError {
    /// HTTP status for `Status` errors
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_unauthorized(&self) -> bool {
        self.status() == Some(401)
    }

    /// Text shown to the user in a banner or inline message
    pub fn user_message(&self, locale: Locale) -> String {
        match self {
            ApiError::Network(_) => locale.text(Message::NetworkError),
            ApiError::Timeout => locale.text(Message::TimeoutError),
            ApiError::Status { status: 401, .. } => locale.text(Message::Unauthorized),
            ApiError::Status { status, message } => {
                let base = locale.text(Message::HttpError(*status));
                if message.is_empty() {
                    base
                } else {
                    format!("{base} ({message})")
                }
            }
            ApiError::Decode(_) => locale.text(Message::DecodeError),
            ApiError::Validation(detail) => {
                format!("{}: {detail}", locale.text(Message::ValidationError))
            }
        }
    }
}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::Decode(e.to_string())
    }
}

/// Result type alias for client operations
pub type Result<T> = std::result::Result<T, ApiError>;
