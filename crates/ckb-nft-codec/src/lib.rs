//! Conversion helpers for CKB NFT extension data.
//!
//! This crate converts between hex strings, UTF-8 text, byte buffers and
//! fixed-width unsigned integers, and renames the keys of JSON-shaped data to
//! camelCase. Every function is pure and synchronous.
//!
//! # Quick Start
//!
//! ```rust
//! use ckb_nft_codec::codec::{hex_to_u8, hex_to_utf8, u32_to_le, u64_to_le, utf8_to_hex};
//! use ckb_nft_codec::case::to_camel_case;
//! use serde_json::{Value, json};
//!
//! assert_eq!(utf8_to_hex("hello"), "0x68656c6c6f");
//! assert_eq!(hex_to_utf8("0x68656c6c6f").unwrap(), "hello");
//!
//! assert_eq!(u32_to_le(1), "01000000");
//! assert_eq!(u64_to_le(1), "0100000000000000");
//! assert_eq!(hex_to_u8("0xff").unwrap(), 255);
//!
//! let renamed: Value = to_camel_case(&json!({ "class_info": { "total_supply": 10 } })).unwrap();
//! assert_eq!(renamed, json!({ "classInfo": { "totalSupply": 10 } }));
//! ```
//!
//! # Modules
//!
//! - [`codec`]: `0x` prefix handling, hex/bytes/UTF-8 and integer encoding
//! - [`case`]: Recursive key renaming
//! - [`error`]: Error types
//!
//! # Failure handling
//!
//! Integer decoders fail fast with [`DecodeError`]. Text decoding and key
//! renaming log through `tracing` and return an error that carries enough to
//! fall back on: [`Utf8Fallback`] keeps the original input.

pub mod case;
pub mod codec;
pub mod error;

// Re-export commonly used items at crate root
pub use case::{CamelCaseOptions, camelize_keys, to_camel_case, to_camel_case_with};
pub use codec::{
    Endian, append_0x, bytes_to_hex, hex_to_bytes, hex_to_u8, hex_to_utf8, remove_0x, u8_to_hex,
    u16_to_be, u32_to_be, u32_to_le, u64_to_le, utf8_to_hex,
};
pub use error::{CaseError, DecodeError, Utf8Fallback};

/// Crate version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
