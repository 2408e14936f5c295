//! Error types for operation execution.
//!
//! Every failure in the pipeline is terminal for its call: nothing is
//! retried, nothing is substituted, and the error reaching the caller is the
//! one raised at the point of detection.

use http::{HeaderMap, StatusCode};
use thiserror::Error;

use pharos_codec::{DecodeError, EncodeError};

/// Result type alias using [`PharosError`].
pub type PharosResult<T> = Result<T, PharosError>;

/// Classified failure of a single operation execution.
#[derive(Debug, Error)]
pub enum PharosError {
    /// The operation referenced a configuration key that was never
    /// registered. Always a caller or bootstrap bug.
    #[error("configuration not found for key '{key}'")]
    ConfigurationNotFound {
        /// The unregistered key.
        key: String,
    },

    /// The transport produced something that could not be interpreted as an
    /// HTTP response at all.
    #[error("invalid response: {message}")]
    InvalidResponse {
        /// Description of the shape violation.
        message: String,
    },

    /// A valid HTTP exchange completed with a status outside `[200, 299]`.
    ///
    /// The response headers are captured for diagnostics; the body is not
    /// re-parsed as an error payload.
    #[error("HTTP error: status {status}")]
    Http {
        /// The non-2xx status code.
        status: StatusCode,
        /// The full response header map.
        headers: HeaderMap,
    },

    /// The transport failed to complete the exchange.
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// Request body serialization failed.
    #[error(transparent)]
    Encoding(#[from] EncodeError),

    /// Response body failed to decode into the declared type.
    #[error(transparent)]
    Decoding(#[from] DecodeError),
}

impl PharosError {
    /// Creates a configuration-not-found error.
    #[must_use]
    pub fn configuration_not_found(key: impl Into<String>) -> Self {
        Self::ConfigurationNotFound { key: key.into() }
    }

    /// Creates an invalid-response error.
    #[must_use]
    pub fn invalid_response(message: impl Into<String>) -> Self {
        Self::InvalidResponse {
            message: message.into(),
        }
    }

    /// Creates an HTTP status error.
    #[must_use]
    pub fn http(status: StatusCode, headers: HeaderMap) -> Self {
        Self::Http { status, headers }
    }

    /// Returns the error category for logging.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::ConfigurationNotFound { .. } => "configuration",
            Self::InvalidResponse { .. } => "invalid-response",
            Self::Http { .. } => "http",
            Self::Transport(_) => "transport",
            Self::Encoding(_) => "encoding",
            Self::Decoding(_) => "decoding",
        }
    }

    /// Returns the HTTP status code, for [`Http`](Self::Http) errors.
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Http { status, .. } => Some(*status),
            _ => None,
        }
    }
}

/// Failure reported by the transport collaborator.
#[derive(Debug, Error)]
#[error("transport failure: {message}")]
pub struct TransportError {
    message: String,
    #[source]
    source: Option<Box<dyn std::error::Error + Send + Sync + 'static>>,
}

impl TransportError {
    /// Creates a transport error with a message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            source: None,
        }
    }

    /// Creates a transport error chaining the underlying cause.
    #[must_use]
    pub fn with_source(
        message: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self {
            message: message.into(),
            source: Some(Box::new(source)),
        }
    }

    /// Returns the failure message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}
