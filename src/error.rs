//! Error types shared by all extension helpers.

use thiserror::Error;

/// Result type alias for extension operations.
pub type ExtensionResult<T> = Result<T, ExtensionError>;

/// Errors produced by the extension helpers.
///
/// Two kinds originate here (`InvalidArgument`, `OutOfRange`); the rest wrap
/// failures of the underlying libraries so callers can match on the source.
#[derive(Error, Debug)]
pub enum ExtensionError {
    /// A required argument had a value the operation cannot serve.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A numeric argument or index fell outside the representable domain.
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Text encoding or decoding failure.
    #[error("Encoding error: {0}")]
    Encoding(String),

    /// Symmetric encryption or decryption failure.
    #[error("Crypto error: {0}")]
    Crypto(String),

    /// XML serialization or deserialization failure.
    #[error("XML error: {0}")]
    Xml(String),

    /// A spawned process could not be driven to completion.
    #[error("Process error: {0}")]
    Process(String),

    /// IO error propagated from the standard library.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Hexadecimal decoding error.
    #[error("Hex decoding error: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Base64 decoding error.
    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    /// URL parsing error.
    #[error("URL parse error: {0}")]
    Url(#[from] url::ParseError),
}

impl ExtensionError {
    /// Helper for creating an invalid-argument error with a message.
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// Helper for creating an out-of-range error with a message.
    pub fn out_of_range(message: impl Into<String>) -> Self {
        Self::OutOfRange(message.into())
    }

    /// Helper for creating an encoding error with a message.
    pub fn encoding(message: impl Into<String>) -> Self {
        Self::Encoding(message.into())
    }

    /// Helper for creating a crypto error with a message.
    pub fn crypto(message: impl Into<String>) -> Self {
        Self::Crypto(message.into())
    }
}
