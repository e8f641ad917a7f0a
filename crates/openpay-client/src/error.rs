//! Client error types.

use openpay_core::ApiError;

/// Result type for client operations.
pub type Result<T> = std::result::Result<T, OpenpayError>;

/// Errors that can occur when using the Openpay client.
#[derive(Debug, thiserror::Error)]
pub enum OpenpayError {
    /// Invalid configuration.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// The request never produced a complete response (connect, DNS, TLS,
    /// timeout, or a connection dropped mid-body).
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with status 400 or above.
    #[error("API error: {error}")]
    Api {
        /// HTTP status of the response.
        status: u16,
        /// Decoded error body.
        error: ApiError,
    },

    /// Request body could not be encoded.
    #[error("serialization error: {0}")]
    Serialization(#[source] serde_json::Error),

    /// Successful response whose body does not match the expected type.
    #[error("decode error: {0}")]
    Decode(#[source] serde_json::Error),
}

impl OpenpayError {
    /// Whether this is a transport-level failure rather than an answer from
    /// the service.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, Self::Http(_))
    }

    /// Whether the failure carries a time-out from the transport.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, Self::Http(e) if e.is_timeout())
    }

    /// The structured error body, if the service rejected the request.
    #[must_use]
    pub fn api_error(&self) -> Option<&ApiError> {
        match self {
            Self::Api { error, .. } => Some(error),
            _ => None,
        }
    }
}
