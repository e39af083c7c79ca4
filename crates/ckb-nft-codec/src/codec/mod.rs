//! Hex, byte, text and fixed-width integer conversions.

pub mod hex;
pub mod int;

pub use self::hex::{
    HEX_PREFIX, append_0x, append_0x_opt, bytes_to_hex, hex_to_bytes, hex_to_utf8,
    hex_to_utf8_lossy, remove_0x, remove_0x_opt, utf8_to_hex,
};
pub use int::{
    Endian, FixedWidth, decode_uint, encode_uint, hex_to_u8, hex_to_u16_be, hex_to_u32_be,
    hex_to_u32_le, hex_to_u64_le, parse_u32, parse_u64, u8_to_hex, u16_to_be, u16_to_le,
    u32_str_to_be, u32_str_to_le, u32_to_be, u32_to_le, u64_str_to_le, u64_to_be, u64_to_le,
};
