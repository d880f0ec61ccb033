//! Unified error handling for equip-core

use thiserror::Error;

/// Generic message shown when a borrow request could not be created.
pub const SUBMIT_FAILED_MESSAGE: &str = "Failed to create request";

/// Core error type for equip-core
#[derive(Error, Debug)]
pub enum Error {
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Validation error: {0}")]
    Validation(String),

    /// No credential is stored; the viewer is anonymous.
    #[error("Not logged in")]
    Unauthenticated,

    /// The server rejected the stored credential (401/403).
    #[error("Session expired or not authorized (HTTP {status})")]
    Unauthorized { status: u16 },

    #[error("API error {status}: {message}")]
    Api { status: u16, message: String },

    #[error("{0}")]
    SubmitFailed(String),

    /// The view scope was disposed before the operation finished.
    #[error("Operation cancelled")]
    Cancelled,
}

/// Result type alias for equip-core
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Error::Config(msg.into())
    }

    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Error::Validation(msg.into())
    }

    /// Create the generic submission failure
    pub fn submit_failed() -> Self {
        Error::SubmitFailed(SUBMIT_FAILED_MESSAGE.to_string())
    }

    /// True when the server signalled that the session is no longer valid
    pub fn is_session_expired(&self) -> bool {
        matches!(self, Error::Unauthorized { .. })
    }
}
