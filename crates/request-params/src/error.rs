//! Error types for parameter encoding.
//!
//! Most conditions the encoder meets (absent values, an unparseable base URL,
//! nothing left to write after filtering) are handled in place and never show
//! up here. What remains are the failures a caller can actually act on.

use thiserror::Error;

/// Main error type for request parameter operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request URL could not be parsed
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The JSON body could not be serialized
    #[error("Failed to serialize request body: {0}")]
    Serialization(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    ConfigError(String),
}

/// Specialized result type for request parameter operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Returns the error code for this error type.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidUrl(_) => "INVALID_URL",
            Self::Serialization(_) => "SERIALIZATION_ERROR",
            Self::ConfigError(_) => "CONFIG_ERROR",
        }
    }

    /// Returns true if this error points at a programming error in the caller.
    #[must_use]
    pub const fn should_log(&self) -> bool {
        matches!(self, Self::Serialization(_))
    }
}

impl From<url::ParseError> for Error {
    fn from(err: url::ParseError) -> Self {
        Self::InvalidUrl(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
