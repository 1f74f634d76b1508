//! Shared error type across metriq crates.

use thiserror::Error;

/// Stable error classification (used in log fields and exit reporting).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorClass {
    /// Invalid input / malformed field value.
    BadRequest,
    /// Resource does not exist on the server.
    NotFound,
    /// Server answered with a non-ok HTTP status.
    Api,
    /// Request never completed (connect/send failure).
    Network,
    /// Response body could not be decoded.
    Decode,
    /// Internal client error.
    Internal,
}

impl ErrorClass {
    /// String representation used in log fields.
    pub fn as_str(self) -> &'static str {
        match self {
            ErrorClass::BadRequest => "BAD_REQUEST",
            ErrorClass::NotFound => "NOT_FOUND",
            ErrorClass::Api => "API_ERROR",
            ErrorClass::Network => "NETWORK_ERROR",
            ErrorClass::Decode => "DECODE_ERROR",
            ErrorClass::Internal => "INTERNAL",
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, MetriqError>;

/// Unified error type used by core and console.
#[derive(Debug, Error)]
pub enum MetriqError {
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("not found: {0}")]
    NotFound(String),
    #[error("api error: status {status}")]
    Api { status: u16 },
    #[error("network error: {0}")]
    Network(String),
    #[error("decode error: {0}")]
    Decode(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl MetriqError {
    /// Map internal error to a stable classification.
    pub fn class(&self) -> ErrorClass {
        match self {
            MetriqError::BadRequest(_) => ErrorClass::BadRequest,
            MetriqError::NotFound(_) => ErrorClass::NotFound,
            MetriqError::Api { .. } => ErrorClass::Api,
            MetriqError::Network(_) => ErrorClass::Network,
            MetriqError::Decode(_) => ErrorClass::Decode,
            MetriqError::Internal(_) => ErrorClass::Internal,
        }
    }
}
