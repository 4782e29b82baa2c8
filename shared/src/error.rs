//! Error types for the reminder dispatch Lambda.

use thiserror::Error;

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while sending a reservation reminder.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error, only raised at startup
    #[error("Configuration error: {0}")]
    Config(String),

    /// Required input missing
    #[error("Validation error: {0}")]
    Validation(String),

    /// Request body could not be parsed
    #[error("Invalid request body: {0}")]
    MalformedBody(String),

    /// No reservation matched the user
    #[error("Not found: {0}")]
    NotFound(String),

    /// Record store returned a non-success status, timed out, or was unreachable
    #[error("Airtable error: {0}")]
    Upstream(String),

    /// Push API rejected the message
    #[error("LINE push failed with status {status}: {body}")]
    Dispatch { status: u16, body: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Get HTTP status code for this error.
    pub fn status_code(&self) -> u16 {
        match self {
            Error::Validation(_) | Error::MalformedBody(_) => 400,
            Error::NotFound(_) => 404,
            _ => 500,
        }
    }

    /// User-facing error label placed in the `error` field of the response.
    pub fn label(&self) -> &'static str {
        match self {
            Error::Validation(_) | Error::MalformedBody(_) => "缺少 userId 或 date",
            Error::NotFound(_) => "找不到預約資料",
            Error::Dispatch { .. } => "LINE 發送失敗",
            _ => "伺服器錯誤",
        }
    }

    /// Diagnostic detail for the `detail` field, if any.
    ///
    /// Dispatch failures carry the push API's body verbatim so the caller can
    /// see LINE's own explanation.
    pub fn detail(&self) -> Option<String> {
        match self {
            Error::Validation(_) | Error::NotFound(_) => None,
            Error::MalformedBody(msg) => Some(msg.clone()),
            Error::Dispatch { body, .. } => Some(body.clone()),
            other => Some(other.to_string()),
        }
    }
}
