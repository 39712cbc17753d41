//! # Common Error Types
//!
//! Consolidated error handling for the client library.
//!
//! The facade never retries and never reinterprets a failure: a transport error keeps
//! its `reqwest::Error`, a rejected request keeps its status code and body. Callers
//! decide what a failure means for their flow.
//!
//! ## Error Categories
//!
//! - **Transport**: no response reached the client (DNS, connect, timeout)
//! - **Rejected**: the service answered with a non-2xx status
//! - **Decode**: a 2xx body that did not match the expected shape
//! - **Validation**: input rejected locally, before any request was sent
//! - **NotAuthenticated**: the operation needs a session and none is active
//! - **Store**: the local session store failed
//! - **Config**: invalid client configuration
//!
//! ## Usage Pattern
//!
//! ```rust
//! use client::core::error::AppError;
//!
//! fn validate_message(message: &str) -> Result<&str, AppError> {
//!     if message.trim().is_empty() {
//!         return Err(AppError::Validation("Message cannot be empty".to_string()));
//!     }
//!     Ok(message)
//! }
//! ```

use reqwest::StatusCode;
use shared::FieldErrors;
use thiserror::Error;

/// Client-wide error type.
#[derive(Debug, Error)]
pub enum AppError {
    /// Network-level failure; no response was received.
    #[error("Network error: {0}")]
    Transport(#[source] reqwest::Error),

    /// The service answered with a non-success status.
    ///
    /// `field_errors` is set when the body has the `{ "errors": { field: [...] } }` shape.
    #[error("Request rejected ({status}): {body}")]
    Rejected {
        status: StatusCode,
        body: String,
        field_errors: Option<FieldErrors>,
    },

    /// Successful response whose body could not be decoded.
    #[error("Failed to parse response: {0}")]
    Decode(String),

    /// Input rejected before any request was sent.
    ///
    /// # Example
    ///
    /// ```rust
    /// use client::core::error::AppError;
    ///
    /// let err = AppError::Validation("Please enter a search term".to_string());
    /// assert_eq!(err.to_string(), "Validation error: Please enter a search term");
    /// ```
    #[error("Validation error: {0}")]
    Validation(String),

    /// Operation requires an active session.
    #[error("Not logged in")]
    NotAuthenticated,

    /// Local session store failure.
    #[error("Session store error: {0}")]
    Store(String),

    /// Invalid configuration.
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Convenience type alias for `Result<T, AppError>`.
pub type Result<T> = std::result::Result<T, AppError>;

impl AppError {
    /// Build a rejection from a status and raw body, parsing field errors when present.
    pub fn rejected(status: StatusCode, body: String) -> Self {
        let field_errors = serde_json::from_str::<FieldErrors>(&body)
            .ok()
            .filter(|errors| !errors.is_empty());
        AppError::Rejected {
            status,
            body,
            field_errors,
        }
    }

    /// HTTP status of a rejected request.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            AppError::Rejected { status, .. } => Some(*status),
            AppError::Transport(e) => e.status(),
            _ => None,
        }
    }

    /// True for a 404 response.
    pub fn is_not_found(&self) -> bool {
        self.status() == Some(StatusCode::NOT_FOUND)
    }

    /// Structured field errors of a rejected request.
    pub fn field_errors(&self) -> Option<&FieldErrors> {
        match self {
            AppError::Rejected { field_errors, .. } => field_errors.as_ref(),
            _ => None,
        }
    }

    /// Text suitable for showing to the user.
    ///
    /// For a rejection with field errors this is every field's messages, one per line.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Rejected {
                field_errors: Some(errors),
                ..
            } => errors.joined(),
            AppError::Validation(msg) => msg.clone(),
            other => other.to_string(),
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Store(err.to_string())
    }
}
