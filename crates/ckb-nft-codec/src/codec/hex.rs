//! Hex prefix handling and hex/bytes/UTF-8 conversions.
//!
//! Hex strings are lowercase on output and carry a `0x` prefix whenever they
//! represent a byte sequence. Prefix matching is case-sensitive: `0X` is
//! treated as ordinary (invalid) digits.

use tracing::error;

use crate::error::{DecodeError, Utf8Fallback};

/// The hex prefix.
pub const HEX_PREFIX: &str = "0x";

/// Text appended to the prefix when [`append_0x_opt`] receives `None`.
pub const UNDEFINED_PLACEHOLDER: &str = "undefined";

// =============================================================================
// PREFIX
// =============================================================================

/// Strips a leading `0x`, if any.
#[inline]
pub fn remove_0x(hex: &str) -> &str {
    hex.strip_prefix(HEX_PREFIX).unwrap_or(hex)
}

/// Like [`remove_0x`], passing `None` through.
#[inline]
pub fn remove_0x_opt(hex: Option<&str>) -> Option<&str> {
    hex.map(remove_0x)
}

/// Prepends `0x` unless the string already starts with it.
pub fn append_0x(hex: &str) -> String {
    if hex.starts_with(HEX_PREFIX) {
        hex.to_string()
    } else {
        format!("{HEX_PREFIX}{hex}")
    }
}

/// Like [`append_0x`] for an optional value.
///
/// `None` produces `"0xundefined"`. Existing callers compare against that
/// string, so it is kept as is even though it is almost never what a caller
/// wants; prefer [`append_0x`] on a present value.
pub fn append_0x_opt(hex: Option<&str>) -> String {
    append_0x(hex.unwrap_or(UNDEFINED_PLACEHOLDER))
}

// =============================================================================
// BYTES
// =============================================================================

/// Decodes an optionally `0x`-prefixed hex string into bytes.
///
/// An empty string (or a bare `0x`) decodes to no bytes. An odd number of
/// digits is read as if a single `0` were prepended, so `0x1` is `[0x01]`.
pub fn hex_to_bytes(hex: &str) -> Result<Vec<u8>, DecodeError> {
    let digits = remove_0x(hex);
    let decoded = if digits.len() % 2 == 1 {
        ::hex::decode(format!("0{digits}"))
    } else {
        ::hex::decode(digits)
    };
    decoded.map_err(|_| DecodeError::InvalidHex {
        context: "hex string",
        digits: digits.to_string(),
    })
}

/// Encodes bytes as a `0x`-prefixed lowercase hex string.
pub fn bytes_to_hex(bytes: &[u8]) -> String {
    let mut s = String::with_capacity(HEX_PREFIX.len() + bytes.len() * 2);
    s.push_str(HEX_PREFIX);
    s.push_str(&::hex::encode(bytes));
    s
}

// =============================================================================
// TEXT
// =============================================================================

/// Encodes trimmed text as a `0x`-prefixed hex string of its UTF-8 bytes.
///
/// Text that already starts with `0x` after trimming is assumed to be encoded
/// and is returned as is.
pub fn utf8_to_hex(text: &str) -> String {
    let text = text.trim();
    if text.starts_with(HEX_PREFIX) {
        return text.to_string();
    }
    bytes_to_hex(text.as_bytes())
}

/// Decodes a trimmed hex string into UTF-8 text.
///
/// On failure an error is logged and the error carries the trimmed input;
/// see [`hex_to_utf8_lossy`] for the form that falls back automatically.
pub fn hex_to_utf8(hex: &str) -> Result<String, Utf8Fallback> {
    let hex = hex.trim();
    decode_text(hex).map_err(|source| {
        error!(input = hex, error = %source, "hex to utf8 failed, keeping input");
        Utf8Fallback {
            original: hex.to_string(),
            source,
        }
    })
}

/// Decodes a hex string into text, or returns the trimmed input unchanged.
pub fn hex_to_utf8_lossy(hex: &str) -> String {
    hex_to_utf8(hex).unwrap_or_else(Utf8Fallback::into_original)
}

fn decode_text(hex: &str) -> Result<String, DecodeError> {
    let bytes = hex_to_bytes(hex)?;
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8 {
        context: "hex string",
    })
}
