//! Fixed-width unsigned integer encoding as hex digits.
//!
//! Encoders emit lowercase digits without a `0x` prefix, always
//! `2 * width` digits long. Decoders accept an optional `0x` prefix and
//! require the exact digit count for the width.

use std::num::IntErrorKind;

use crate::codec::hex::remove_0x;
use crate::error::DecodeError;

/// Byte order of an encoded integer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endian {
    /// Most significant byte first.
    Big,
    /// Least significant byte first.
    Little,
}

/// An unsigned integer with a fixed byte width.
pub trait FixedWidth: Copy + Sized {
    /// Type name used in error messages.
    const KIND: &'static str;
    /// Width in bytes.
    const BYTES: usize;

    /// Returns the bytes of `self` in the given order.
    fn to_bytes(self, endian: Endian) -> Vec<u8>;

    /// Reads a value from exactly [`Self::BYTES`] bytes.
    fn from_bytes(bytes: &[u8], endian: Endian) -> Option<Self>;
}

macro_rules! impl_fixed_width {
    ($($ty:ty => $kind:literal),* $(,)?) => {
        $(
            impl FixedWidth for $ty {
                const KIND: &'static str = $kind;
                const BYTES: usize = std::mem::size_of::<$ty>();

                #[inline]
                fn to_bytes(self, endian: Endian) -> Vec<u8> {
                    match endian {
                        Endian::Big => self.to_be_bytes().to_vec(),
                        Endian::Little => self.to_le_bytes().to_vec(),
                    }
                }

                #[inline]
                fn from_bytes(bytes: &[u8], endian: Endian) -> Option<Self> {
                    let array: [u8; std::mem::size_of::<$ty>()] = bytes.try_into().ok()?;
                    Some(match endian {
                        Endian::Big => <$ty>::from_be_bytes(array),
                        Endian::Little => <$ty>::from_le_bytes(array),
                    })
                }
            }
        )*
    };
}

impl_fixed_width!(u8 => "u8", u16 => "u16", u32 => "u32", u64 => "u64");

// =============================================================================
// ENCODING
// =============================================================================

/// Encodes an integer as `2 * T::BYTES` lowercase hex digits.
pub fn encode_uint<T: FixedWidth>(value: T, endian: Endian) -> String {
    ::hex::encode(value.to_bytes(endian))
}

/// Encodes a `u8` as 2 hex digits.
pub fn u8_to_hex(value: u8) -> String {
    encode_uint(value, Endian::Big)
}

/// Encodes a `u16` as 4 big-endian hex digits.
pub fn u16_to_be(value: u16) -> String {
    encode_uint(value, Endian::Big)
}

/// Encodes a `u16` as 4 little-endian hex digits.
pub fn u16_to_le(value: u16) -> String {
    encode_uint(value, Endian::Little)
}

/// Encodes a `u32` as 8 big-endian hex digits.
pub fn u32_to_be(value: u32) -> String {
    encode_uint(value, Endian::Big)
}

/// Encodes a `u32` as 8 little-endian hex digits.
pub fn u32_to_le(value: u32) -> String {
    encode_uint(value, Endian::Little)
}

/// Encodes a numeric string (see [`parse_u32`]) as 8 big-endian hex digits.
pub fn u32_str_to_be(value: &str) -> Result<String, DecodeError> {
    parse_u32(value).map(u32_to_be)
}

/// Encodes a numeric string (see [`parse_u32`]) as 8 little-endian hex digits.
pub fn u32_str_to_le(value: &str) -> Result<String, DecodeError> {
    parse_u32(value).map(u32_to_le)
}

/// Encodes a `u64` as 16 little-endian hex digits.
///
/// Built from two little-endian 32-bit halves, low half first, which is the
/// same byte sequence as `u64::to_le_bytes`.
pub fn u64_to_le(value: u64) -> String {
    let high = (value >> 32) as u32;
    let low = value as u32;
    let mut s = u32_to_le(low);
    s.push_str(&u32_to_le(high));
    s
}

/// Encodes a `u64` as 16 big-endian hex digits.
pub fn u64_to_be(value: u64) -> String {
    encode_uint(value, Endian::Big)
}

/// Encodes a numeric string (see [`parse_u64`]) as 16 little-endian hex digits.
pub fn u64_str_to_le(value: &str) -> Result<String, DecodeError> {
    parse_u64(value).map(u64_to_le)
}

// =============================================================================
// DECODING
// =============================================================================

/// Decodes exactly `2 * T::BYTES` hex digits, with an optional `0x` prefix.
pub fn decode_uint<T: FixedWidth>(hex: &str, endian: Endian) -> Result<T, DecodeError> {
    let digits = remove_0x(hex);
    let expected = T::BYTES * 2;
    if digits.len() != expected {
        return Err(DecodeError::InvalidLength {
            kind: T::KIND,
            expected,
            actual: digits.len(),
        });
    }
    let bytes = ::hex::decode(digits).map_err(|_| DecodeError::InvalidHex {
        context: T::KIND,
        digits: digits.to_string(),
    })?;
    T::from_bytes(&bytes, endian).ok_or(DecodeError::InvalidLength {
        kind: T::KIND,
        expected,
        actual: bytes.len() * 2,
    })
}

/// Decodes 2 hex digits into a `u8`.
pub fn hex_to_u8(hex: &str) -> Result<u8, DecodeError> {
    decode_uint(hex, Endian::Big)
}

/// Decodes 4 big-endian hex digits into a `u16`.
pub fn hex_to_u16_be(hex: &str) -> Result<u16, DecodeError> {
    decode_uint(hex, Endian::Big)
}

/// Decodes 8 big-endian hex digits into a `u32`.
pub fn hex_to_u32_be(hex: &str) -> Result<u32, DecodeError> {
    decode_uint(hex, Endian::Big)
}

/// Decodes 8 little-endian hex digits into a `u32`.
pub fn hex_to_u32_le(hex: &str) -> Result<u32, DecodeError> {
    decode_uint(hex, Endian::Little)
}

/// Decodes 16 little-endian hex digits into a `u64`.
pub fn hex_to_u64_le(hex: &str) -> Result<u64, DecodeError> {
    decode_uint(hex, Endian::Little)
}

// =============================================================================
// NUMERIC STRINGS
// =============================================================================

/// Parses a numeric string into a `u64`.
///
/// Accepts surrounding whitespace, decimal digits, or `0x`/`0X` followed by
/// hex digits. A leading `+` is allowed on decimal digits only. Fractions,
/// exponents, other signs and the empty string are rejected.
pub fn parse_u64(input: &str) -> Result<u64, DecodeError> {
    parse_numeric(input, "u64")
}

/// Parses a numeric string into a `u32`, with the rules of [`parse_u64`].
pub fn parse_u32(input: &str) -> Result<u32, DecodeError> {
    let value = parse_numeric(input, "u32")?;
    u32::try_from(value).map_err(|_| DecodeError::OutOfRange {
        kind: "u32",
        input: input.to_string(),
    })
}

fn parse_numeric(input: &str, kind: &'static str) -> Result<u64, DecodeError> {
    let trimmed = input.trim();
    let parsed = match trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
    {
        Some(digits) if digits.starts_with('+') => {
            return Err(DecodeError::InvalidNumber {
                input: input.to_string(),
            });
        }
        Some(digits) => u64::from_str_radix(digits, 16),
        None => trimmed.parse::<u64>(),
    };
    parsed.map_err(|e| match e.kind() {
        IntErrorKind::PosOverflow => DecodeError::OutOfRange {
            kind,
            input: input.to_string(),
        },
        _ => DecodeError::InvalidNumber {
            input: input.to_string(),
        },
    })
}
