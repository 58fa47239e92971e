//! Error types exposed by the movies data access layer.

use thiserror::Error;

/// Errors surfaced while validating calls or communicating with the movies API.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The API answered with a non-success status.
    #[error("movies API rejected the request with status {status}: {message}")]
    ServerRejected {
        /// HTTP status code returned by the API.
        status: u16,
        /// Message extracted from the response body.
        message: String,
    },

    /// No response arrived (connection failure or timeout).
    #[error("no response from the movies API: {message}")]
    NoResponse {
        /// Transport-level error detail.
        message: String,
    },

    /// The call was malformed and was never sent.
    #[error("invalid request: {message}")]
    LocalValidation {
        /// Which argument was rejected and why.
        message: String,
    },

    /// The requested movie does not exist or the identifier is unusable.
    #[error("movie not found: {message}")]
    NotFound {
        /// Details about the missing resource.
        message: String,
    },

    /// A success response carried a body that could not be decoded.
    #[error("unexpected response from the movies API: {message}")]
    Decode {
        /// Decoder error detail.
        message: String,
    },

    /// Configuration could not be loaded or is invalid.
    #[error("configuration error: {message}")]
    Configuration {
        /// Details about the configuration failure.
        message: String,
    },

    /// Local I/O operation failed.
    #[error("I/O error: {message}")]
    Io {
        /// Error detail from the underlying I/O operation.
        message: String,
    },
}

impl ApiError {
    /// Builds a [`ApiError::LocalValidation`] from any displayable message.
    #[must_use]
    pub fn local(message: impl Into<String>) -> Self {
        Self::LocalValidation {
            message: message.into(),
        }
    }

    /// Builds a [`ApiError::NotFound`] from any displayable message.
    #[must_use]
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    /// Returns a short label naming the failure class, used in log context.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::ServerRejected { .. } => "server-rejected",
            Self::NoResponse { .. } => "no-response",
            Self::LocalValidation { .. } => "local-validation",
            Self::NotFound { .. } => "not-found",
            Self::Decode { .. } => "decode",
            Self::Configuration { .. } => "configuration",
            Self::Io { .. } => "io",
        }
    }
}
