//! Errors raised by the external calls behind the two screens. Every variant is
//! recoverable from the user's point of view: the submission boundary turns it
//! into a notification and the form stays editable.

use serde_json::Value;
use thiserror::Error;

/// Maximum number of error body characters surfaced to the user.
pub const MAX_ERROR_CHARS: usize = 200;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum AppError {
    #[error("Config error: {0}")]
    Config(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Timeout: {0}")]
    Timeout(String),
    #[error("Request failed ({status}): {message}")]
    Http { status: u16, message: String },
    #[error("Response error: {0}")]
    Parse(String),
    #[error("Request error: {0}")]
    Serialization(String),
}

impl AppError {
    /// Best-effort user-facing text for a failure.
    ///
    /// Server-provided messages win over the transport wording, so an
    /// account-service reply such as `{"message": "User exists already!"}`
    /// is shown verbatim.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            AppError::Http { message, .. } | AppError::Config(message) => message.clone(),
            _ => self.to_string(),
        }
    }

    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, AppError::Network(_) | AppError::Timeout(_))
    }

    /// Builds an HTTP failure from a non-success reply body.
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        AppError::Http {
            status,
            message: error_message(body),
        }
    }
}

/// The body's JSON `message` field when present, else the sanitized body.
#[must_use]
pub fn error_message(body: &str) -> String {
    serde_json::from_str::<Value>(body)
        .ok()
        .and_then(|value| {
            value
                .get("message")
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|message| !message.is_empty())
                .map(str::to_string)
        })
        .unwrap_or_else(|| sanitize_body(body))
}

/// Trims and truncates error bodies for user-facing messages.
#[must_use]
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}
