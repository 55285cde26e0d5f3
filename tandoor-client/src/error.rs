//! Client error types

use thiserror::Error;

/// Client error type
#[derive(Debug, Error)]
pub enum ClientError {
    /// HTTP request failed
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// TCP / IO failure on the sync channel
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Sync frame could not be decoded
    #[error("Frame error: {0}")]
    Frame(#[from] shared::sync::FrameError),

    /// Invalid response format
    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    /// Order submission attempted with an empty cart
    #[error("Cart is empty")]
    EmptyCart,

    /// Authentication required
    #[error("Authentication required")]
    Unauthorized,

    /// Permission denied
    #[error("Permission denied: {0}")]
    Forbidden(String),

    /// Resource not found
    #[error("Not found: {0}")]
    NotFound(String),

    /// Validation error
    #[error("Validation error: {0}")]
    Validation(String),

    /// Server-reported error with its error code
    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type for client operations
pub type ClientResult<T> = Result<T, ClientError>;
