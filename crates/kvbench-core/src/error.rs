//! Shared error type across kvbench crates.

use thiserror::Error;

/// Stable HTTP status classes (stable API for the gateway layer).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusClass {
    /// Invalid input / malformed config.
    BadRequest,
    /// No backend registered under the requested route.
    NotFound,
    /// A storage provider could not be reached.
    BadGateway,
    /// Internal server error.
    Internal,
}

impl StatusClass {
    /// Numeric HTTP status used in responses.
    pub fn as_u16(self) -> u16 {
        match self {
            StatusClass::BadRequest => 400,
            StatusClass::NotFound => 404,
            StatusClass::BadGateway => 502,
            StatusClass::Internal => 500,
        }
    }
}

/// Shared result type.
pub type Result<T> = std::result::Result<T, KvBenchError>;

/// Unified error type used by core and gateway.
#[derive(Debug, Error)]
pub enum KvBenchError {
    /// Network/auth/timeout failure while talking to a storage provider.
    /// Never retried by the core; the caller decides what to do.
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
    /// A stored value could not be decoded as a counter.
    #[error("malformed stored value: {0}")]
    MalformedValue(String),
    #[error("unknown backend: {0}")]
    UnknownBackend(String),
    #[error("bad request: {0}")]
    BadRequest(String),
    #[error("internal: {0}")]
    Internal(String),
}

impl KvBenchError {
    /// Map internal error to a stable HTTP status class.
    pub fn status_class(&self) -> StatusClass {
        match self {
            KvBenchError::BackendUnavailable(_) => StatusClass::BadGateway,
            KvBenchError::MalformedValue(_) => StatusClass::Internal,
            KvBenchError::UnknownBackend(_) => StatusClass::NotFound,
            KvBenchError::BadRequest(_) => StatusClass::BadRequest,
            KvBenchError::Internal(_) => StatusClass::Internal,
        }
    }
}
