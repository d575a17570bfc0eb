//! Error types for color literals and digest extraction.

use thiserror::Error;

/// Errors from parsing a color literal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColorParseError {
    /// The literal matched none of the supported forms.
    #[error("unrecognized color literal: '{0}'")]
    Unrecognized(String),

    /// A channel was outside its allowed range.
    #[error("color channel '{channel}' out of range: {value}")]
    ChannelOutOfRange {
        /// Channel name (e.g., "red", "saturation").
        channel: &'static str,
        /// The offending value as written.
        value: String,
    },
}

/// Errors from reading numbers out of a digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestError {
    /// The digest string was empty.
    #[error("digest is empty")]
    Empty,

    /// The digest contained a non-hexadecimal character.
    #[error("digest contains non-hex character '{0}'")]
    InvalidHex(char),

    /// Requested read length is zero or wider than 32 bits.
    #[error("extraction length {0} must be between 1 and 8 hex characters")]
    InvalidLength(usize),

    /// Requested read runs past the end of the digest.
    #[error("extraction of {length} hex characters at offset {offset} exceeds digest length {available}")]
    OutOfRange {
        /// Start offset in hex characters.
        offset: usize,
        /// Number of hex characters requested.
        length: usize,
        /// Digest length in hex characters.
        available: usize,
    },
}

/// Top-level error type for spec operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Color literal could not be parsed.
    #[error("color error: {0}")]
    Color(#[from] ColorParseError),

    /// Digest could not be read.
    #[error("digest error: {0}")]
    Digest(#[from] DigestError),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),
}

/// Common interface for generator errors.
///
/// Codes are stable strings like "AVATAR_001" so callers and the CLI's JSON
/// output can match on them without parsing messages.
pub trait BackendError: std::error::Error {
    /// Stable error code.
    fn code(&self) -> &'static str;

    /// Human-readable message. Defaults to `Display`.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Error category, e.g. "avatar".
    fn category(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_out_of_range_message() {
        let err = DigestError::OutOfRange {
            offset: 62,
            length: 4,
            available: 64,
        };
        assert_eq!(
            err.to_string(),
            "extraction of 4 hex characters at offset 62 exceeds digest length 64"
        );
    }

    #[test]
    fn test_spec_error_from_color() {
        let err: SpecError = ColorParseError::Unrecognized("nope".into()).into();
        assert!(err.to_string().contains("nope"));
    }
}
