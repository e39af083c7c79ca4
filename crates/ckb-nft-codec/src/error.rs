//! Error types for hex, integer and key-casing conversions.

use thiserror::Error;

/// Error during hex, UTF-8 or integer decoding.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    #[error("invalid hex digits in {context}: {digits:?}")]
    InvalidHex {
        context: &'static str,
        digits: String,
    },

    #[error("the hex format length of {kind} must be equal to {expected}, found {actual}")]
    InvalidLength {
        kind: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("invalid UTF-8 in {context}")]
    InvalidUtf8 { context: &'static str },

    #[error("not a numeric string: {input:?}")]
    InvalidNumber { input: String },

    #[error("{input:?} does not fit in {kind}")]
    OutOfRange { kind: &'static str, input: String },
}

/// Error while renaming the keys of a serializable value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaseError {
    #[error("value cannot be represented as JSON: {0}")]
    Serialize(String),

    #[error("renamed value does not match the target type: {0}")]
    Deserialize(String),
}

/// A hex string that could not be decoded to text.
///
/// Carries the trimmed input so callers can fall back to it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("hex to utf8 failed for {original:?}: {source}")]
pub struct Utf8Fallback {
    pub original: String,
    #[source]
    pub source: DecodeError,
}

impl Utf8Fallback {
    /// Returns the trimmed input that failed to decode.
    pub fn into_original(self) -> String {
        self.original
    }
}
