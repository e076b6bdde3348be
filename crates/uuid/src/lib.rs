//! UUID transcoding between canonical text and legacy driver binary encodings.
//!
//! MongoDB stores UUIDs as tagged binary values. Before subtype 4 was standardised, each driver
//! wrote the 16 UUID bytes under subtype 3 using its own byte order, so the same stored bytes
//! mean different UUIDs depending on which driver wrote them.
//!
//! This crate converts between:
//! - **Canonical text**: `00112233-4455-6677-8899-aabbccddeeff` (braces, dashes and case are
//!   tolerated on input; output is always lowercase and dashed).
//! - **Encoded values**: a subtype tag plus 16 payload bytes, carried as base64.
//!
//! ## Supported encodings
//!
//! | Variant        | Tag      | Subtype | Byte order                                   |
//! |----------------|----------|---------|----------------------------------------------|
//! | `Standard`     | `UUID`   | 4       | network order                                |
//! | `JavaLegacy`   | `JUUID`  | 3       | each 8-byte half reversed                    |
//! | `CSharpLegacy` | `CSUUID` | 3       | first three GUID fields little-endian        |
//! | `PythonLegacy` | `PYUUID` | 3       | network order                                |
//!
//! ## Subtype 3 is ambiguous
//! The three legacy variants share subtype 3, so a stored value cannot say which driver wrote
//! it. Every decode operation therefore takes the [`EncodingVariant`] from the caller. Use
//! [`EncodingVariant::candidates_for_subtype`] to list what a given subtype could mean.
//!
//! ## Example
//! ```
//! use bindata_uuid::{codec, EncodingVariant};
//!
//! let value = codec::encode(EncodingVariant::CSharpLegacy, "{00112233-4455-6677-8899-aabbccddeeff}")?;
//! assert_eq!(codec::decode_raw(&value)?, r#"HexData(3, "33221100-5544-7766-8899-aabbccddeeff")"#);
//! assert_eq!(
//!     codec::decode(EncodingVariant::CSharpLegacy, &value)?,
//!     r#"CSUUID("00112233-4455-6677-8899-aabbccddeeff")"#
//! );
//! # Ok::<(), bindata_uuid::UuidError>(())
//! ```
//!
//! All operations are pure functions over fixed 16-byte buffers and are safe to call from any
//! number of threads.

pub mod binary;
pub mod canonical;
pub mod codec;
pub mod display;
pub mod permute;
pub mod strings;
pub mod transcode;
pub mod variant;

// Re-export public types
pub use binary::{BinaryContainer, EncodedValue};
pub use canonical::CanonicalUuid;
pub use variant::{EncodingVariant, BINARY_SUBTYPE_UUID, BINARY_SUBTYPE_UUID_OLD};

/// Number of bytes in a UUID.
pub const UUID_LEN: usize = 16;

/// Raw UUID bytes.
pub type UuidBytes = [u8; UUID_LEN];

/// Error type for UUID transcoding operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UuidError {
    /// UUID text is not 32 hex digits once braces and dashes are removed.
    #[error("Malformed input: {0}")]
    MalformedInput(String),
    /// Base64 payload has the wrong length, alphabet or padding.
    #[error("Invalid base64: {0}")]
    InvalidBase64(String),
    /// Requested variant name is not one of the four supported encodings.
    #[error("Unknown variant: '{0}'")]
    UnknownVariant(String),
    /// Binary payload does not hold exactly 16 bytes.
    #[error("Invalid payload length: expected 16 bytes, got {0}")]
    InvalidPayloadLength(usize),
    /// Binary subtype does not match the subtype of the requested variant.
    #[error("Subtype mismatch: expected {expected}, got {actual}")]
    SubtypeMismatch { expected: u8, actual: u8 },
}

/// Result type for UUID transcoding operations.
pub type UuidResult<T> = Result<T, UuidError>;
