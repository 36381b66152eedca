/*
[INPUT]:  Failure conditions from token parsing, algorithm dispatch and signing
[OUTPUT]: Structured error types shared by the whole crate
[POS]:    Error handling layer - unified error types
[UPDATE]: When adding new failure sources or changing error messages
*/

use thiserror::Error;

/// Main error type for chain-auth operations
///
/// Only protocol-level failures live here. Business rejections (expired
/// token, invalid signature) are reported through [`crate::AuthReport`],
/// never as errors, so callers can tell a malformed request apart from a
/// caller that failed to authenticate.
#[derive(Error, Debug)]
pub enum AuthError {
    /// Token structure violates the wire format (segment count, base64,
    /// JSON shape, missing fields)
    #[error("Malformed jws: {0}")]
    Format(String),

    /// Header names an algorithm absent from the registry
    #[error("Unsupported algorithm: {0}")]
    UnsupportedAlgorithm(String),

    /// Key material could not be decoded for signing
    #[error("Invalid key material: {0}")]
    Key(String),

    /// Serializing a header or payload segment failed
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl AuthError {
    /// Create a format error from any message
    pub fn format(message: impl Into<String>) -> Self {
        AuthError::Format(message.into())
    }

    /// Create a key error from any message
    pub fn key(message: impl Into<String>) -> Self {
        AuthError::Key(message.into())
    }

    /// Check if the error indicates a malformed request (as opposed to a
    /// service-side configuration problem)
    pub fn is_format_error(&self) -> bool {
        matches!(self, AuthError::Format(_) | AuthError::Serialization(_))
    }
}

/// Result type alias for chain-auth operations
pub type Result<T> = std::result::Result<T, AuthError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_error_message() {
        let err = AuthError::format("Jws has extra field");
        assert_eq!(err.to_string(), "Malformed jws: Jws has extra field");
        assert!(err.is_format_error());
    }

    #[test]
    fn test_unsupported_algorithm_is_not_format() {
        let err = AuthError::UnsupportedAlgorithm("DOGE".to_string());
        assert!(!err.is_format_error());
        assert_eq!(err.to_string(), "Unsupported algorithm: DOGE");
    }
}
