//! Crypto error types.

/// Errors from safety-number operations.
///
/// Only recoverable conditions live here. Verification outcomes are
/// [`MatchResult`](crate::MatchResult) variants, and caller precondition
/// violations panic.
#[derive(Debug, thiserror::Error)]
pub enum CryptoError {
    #[error("Invalid key length: expected {expected}, got {actual}")]
    InvalidKeyLength { expected: usize, actual: usize },

    #[error("Unknown identity key type: {0:#04x}")]
    InvalidKeyType(u8),

    #[error("Invalid key encoding: {0}")]
    InvalidKeyEncoding(String),

    #[error("Malformed scannable payload: {0}")]
    MalformedPayload(String),

    #[error("Scannable payload is missing {0}")]
    MissingField(&'static str),

    #[error("Invalid digest length: expected {expected}, got {actual}")]
    InvalidDigestLength { expected: usize, actual: usize },

    #[error("Rendering scannable image failed: {0}")]
    RenderFailed(String),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl CryptoError {
    /// Whether this error came from decoding untrusted scanned bytes.
    ///
    /// Callers surface these as "invalid code" rather than as a mismatch.
    pub const fn is_decode_error(&self) -> bool {
        matches!(
            self,
            Self::MalformedPayload(_) | Self::MissingField(_) | Self::InvalidDigestLength { .. }
        )
    }
}

impl From<prost::DecodeError> for CryptoError {
    fn from(err: prost::DecodeError) -> Self {
        Self::MalformedPayload(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_errors_are_classified() {
        assert!(CryptoError::MalformedPayload("eof".into()).is_decode_error());
        assert!(CryptoError::MissingField("version").is_decode_error());
        assert!(
            CryptoError::InvalidDigestLength {
                expected: 32,
                actual: 3
            }
            .is_decode_error()
        );
        assert!(!CryptoError::RenderFailed("no space".into()).is_decode_error());
        assert!(!CryptoError::Config("bad".into()).is_decode_error());
    }

    #[test]
    fn messages_include_lengths() {
        let err = CryptoError::InvalidDigestLength {
            expected: 32,
            actual: 31,
        };
        assert_eq!(err.to_string(), "Invalid digest length: expected 32, got 31");
    }
}
