//! Tagged binary values: the boundary with the host's binary data type.
//!
//! A stored UUID is a subtype tag plus a byte payload. Hosts usually already have a type for
//! this (a BSON binary, a driver's `BinData`), so the codec works against the
//! [`BinaryContainer`] trait rather than a concrete type. [`EncodedValue`] is the built-in
//! implementation.
//!
//! # Textual forms
//! - Shell literal: `BinData(3, "vbQGGwG4oEWmHKInPW30lA==")` via `Display` and
//!   [`EncodedValue::parse_bin_data`].
//! - Extended JSON (with the `serde` feature):
//!   `{"$binary":{"base64":"vbQGGwG4oEWmHKInPW30lA==","subType":"03"}}`.

use crate::display::unquote;
use crate::{transcode, UuidBytes, UuidError, UuidResult};
use std::fmt;

/// A host-provided tagged byte string.
///
/// The codec constructs values through [`BinaryContainer::from_parts`] and reads them back
/// through [`BinaryContainer::subtype`] and [`BinaryContainer::payload`]. It never stores them.
pub trait BinaryContainer: Sized {
    /// Builds a value from a subtype and a base64 payload.
    ///
    /// # Errors
    ///
    /// Implementations return an error if the payload is not valid base64.
    fn from_parts(subtype: u8, base64: &str) -> UuidResult<Self>;

    /// The subtype tag.
    fn subtype(&self) -> u8;

    /// The raw payload bytes.
    fn payload(&self) -> &[u8];
}

/// Returns the payload of `value` as exactly 16 bytes.
///
/// # Errors
///
/// Returns [`UuidError::InvalidPayloadLength`] if the payload is any other length.
pub fn uuid_payload<C: BinaryContainer>(value: &C) -> UuidResult<UuidBytes> {
    let payload = value.payload();
    UuidBytes::try_from(payload).map_err(|_| UuidError::InvalidPayloadLength(payload.len()))
}

/// A subtype tag and a 16-byte payload.
///
/// The payload holds the bytes exactly as stored, i.e. already permuted by whichever encoding
/// produced it. Nothing in the value records which encoding that was.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct EncodedValue {
    subtype: u8,
    payload: UuidBytes,
}

impl EncodedValue {
    /// Builds a value from a subtype and a base64 payload.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::InvalidBase64`] if `base64` does not decode to 16 bytes.
    pub fn new(subtype: u8, base64: &str) -> UuidResult<Self> {
        let payload = transcode::base64_to_bytes(base64)?;
        Ok(Self { subtype, payload })
    }

    /// Builds a value from a subtype and stored bytes.
    pub const fn from_bytes(subtype: u8, payload: UuidBytes) -> Self {
        Self { subtype, payload }
    }

    pub fn subtype(&self) -> u8 {
        self.subtype
    }

    pub fn payload(&self) -> &UuidBytes {
        &self.payload
    }

    /// The payload as padded standard base64.
    pub fn to_base64(&self) -> String {
        transcode::bytes_to_base64(&self.payload)
    }

    /// The payload as 32 lowercase hex digits.
    pub fn to_hex(&self) -> String {
        transcode::bytes_to_hex(&self.payload)
    }

    /// Parses a shell literal such as `BinData(3, "vbQGGwG4oEWmHKInPW30lA==")`.
    ///
    /// The payload may be wrapped in single or double quotes.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::MalformedInput`] if the literal is not `BinData(<subtype>, <payload>)`
    /// with a subtype in `0..=255`, or [`UuidError::InvalidBase64`] if the payload is invalid.
    pub fn parse_bin_data(input: &str) -> UuidResult<Self> {
        let malformed = || {
            UuidError::MalformedInput(format!(
                "expected BinData(<subtype>, \"<base64>\"), got: '{}'",
                input
            ))
        };

        let inner = input
            .trim()
            .strip_prefix("BinData(")
            .and_then(|rest| rest.strip_suffix(')'))
            .ok_or_else(malformed)?;
        let (subtype, payload) = inner.split_once(',').ok_or_else(malformed)?;
        let subtype: u8 = subtype.trim().parse().map_err(|_| malformed())?;

        Self::new(subtype, unquote(payload.trim()))
    }
}

impl BinaryContainer for EncodedValue {
    fn from_parts(subtype: u8, base64: &str) -> UuidResult<Self> {
        Self::new(subtype, base64)
    }

    fn subtype(&self) -> u8 {
        self.subtype
    }

    fn payload(&self) -> &[u8] {
        &self.payload
    }
}

impl fmt::Display for EncodedValue {
    /// Formats as the shell literal `BinData(<subtype>, "<base64>")`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BinData({}, \"{}\")", self.subtype, self.to_base64())
    }
}

#[cfg(feature = "serde")]
mod extended_json {
    use super::EncodedValue;
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serialize, Serializer};

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Envelope {
        #[serde(rename = "$binary")]
        binary: Binary,
    }

    #[derive(Serialize, Deserialize)]
    #[serde(deny_unknown_fields)]
    struct Binary {
        base64: String,
        #[serde(rename = "subType")]
        sub_type: String,
    }

    impl Serialize for EncodedValue {
        fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
        where
            S: Serializer,
        {
            Envelope {
                binary: Binary {
                    base64: self.to_base64(),
                    sub_type: format!("{:02x}", self.subtype),
                },
            }
            .serialize(serializer)
        }
    }

    impl<'de> Deserialize<'de> for EncodedValue {
        fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
        where
            D: Deserializer<'de>,
        {
            let envelope = Envelope::deserialize(deserializer)?;
            let sub_type = envelope.binary.sub_type;
            if sub_type.is_empty() || sub_type.len() > 2 {
                return Err(D::Error::custom(format!(
                    "subType must be one or two hex digits, got '{}'",
                    sub_type
                )));
            }
            let subtype = u8::from_str_radix(&sub_type, 16).map_err(D::Error::custom)?;
            EncodedValue::new(subtype, &envelope.binary.base64).map_err(D::Error::custom)
        }
    }
}
