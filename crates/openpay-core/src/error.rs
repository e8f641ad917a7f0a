//! Structured error body returned by the service.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which side of the exchange failed.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCategory {
    /// The request was rejected (bad parameters, declined card, ...).
    Request,
    /// The service failed internally.
    Internal,
    /// The upstream payment gateway failed.
    Gateway,
    /// Missing or unrecognized category.
    #[default]
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Self::Request => "request",
            Self::Internal => "internal",
            Self::Gateway => "gateway",
            Self::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// Error body of a response with status 400 or above.
///
/// Every field has a default: a body that is not valid JSON, or that has a
/// different shape, still produces an `ApiError` with empty fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
#[error("{error_code}: {category} - {description}")]
pub struct ApiError {
    /// Failure category.
    #[serde(default)]
    pub category: ErrorCategory,

    /// Numeric error code (`1001` invalid request, `3001` card declined, ...).
    #[serde(default)]
    pub error_code: u32,

    /// HTTP status code as reported in the body.
    #[serde(default)]
    pub http_code: u16,

    /// Human readable description.
    #[serde(default)]
    pub description: String,

    /// Correlation identifier of the failed request.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_id: Option<String>,

    /// Fraud rules triggered by the request, if any.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fraud_rules: Option<Vec<String>>,
}

impl ApiError {
    /// Decode an error body, falling back to an all-default error when it
    /// cannot be parsed.
    #[must_use]
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}
