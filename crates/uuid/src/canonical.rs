//! Canonical UUID text handling.
//!
//! Input text is tolerant: `{00112233-4455-6677-8899-AABBCCDDEEFF}`, `00112233445566778899aabbccddeeff`
//! and anything in between are all accepted. Normalisation removes every `{`, `}` and `-`, then
//! requires exactly 32 hex digits. Nothing is truncated or padded.
//!
//! Output text is always the lowercase 8-4-4-4-12 form without braces.

use crate::{transcode, UuidBytes, UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Re-exported for convenience.
pub use ::uuid::Uuid;

/// Strips braces and dashes from `input` and returns the 32 lowercase hex digits.
///
/// Leading and trailing whitespace is ignored.
///
/// # Errors
///
/// Returns [`UuidError::MalformedInput`] if the cleaned text is not exactly 32 hex digits.
pub fn normalize(input: &str) -> UuidResult<String> {
    let cleaned: String = input
        .trim()
        .chars()
        .filter(|c| !matches!(c, '{' | '}' | '-'))
        .collect();

    if cleaned.len() != 32 || !cleaned.bytes().all(|b| b.is_ascii_hexdigit()) {
        tracing::debug!(input, "rejected malformed UUID text");
        return Err(UuidError::MalformedInput(format!(
            "UUID must be 32 hex digits once braces and dashes are removed, got: '{}'",
            input
        )));
    }

    Ok(cleaned.to_ascii_lowercase())
}

/// A UUID held as 16 bytes in network order.
///
/// Once constructed the value is always valid; there is no separate "unchecked" state.
///
/// # Construction
/// - [`CanonicalUuid::parse`] normalises and validates text.
/// - [`CanonicalUuid::from_bytes`] wraps raw bytes.
///
/// # Display format
/// `Display` writes the lowercase dashed form, e.g. `00112233-4455-6677-8899-aabbccddeeff`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalUuid(Uuid);

impl CanonicalUuid {
    /// Parses UUID text, tolerating braces, dashes and uppercase digits.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::MalformedInput`] if `input` does not normalise to 32 hex digits.
    pub fn parse(input: &str) -> UuidResult<Self> {
        let hex = normalize(input)?;
        let bytes = transcode::hex_to_bytes(&hex)?;
        Ok(Self::from_bytes(bytes))
    }

    /// Wraps 16 bytes in network order.
    pub const fn from_bytes(bytes: UuidBytes) -> Self {
        Self(Uuid::from_bytes(bytes))
    }

    /// Returns the 16 bytes in network order.
    pub fn as_bytes(&self) -> &UuidBytes {
        self.0.as_bytes()
    }

    /// Returns the underlying `uuid::Uuid`.
    pub fn uuid(&self) -> Uuid {
        self.0
    }

    /// Returns the 32 lowercase hex digits without dashes.
    pub fn simple(&self) -> String {
        self.0.simple().to_string()
    }

    /// Returns true if `input` is already in canonical output form.
    ///
    /// That is 36 characters, lowercase hex digits, with dashes at positions 8, 13, 18 and 23
    /// and nowhere else.
    pub fn is_canonical(input: &str) -> bool {
        input.len() == 36
            && input.bytes().enumerate().all(|(i, b)| match i {
                8 | 13 | 18 | 23 => b == b'-',
                _ => matches!(b, b'0'..=b'9' | b'a'..=b'f'),
            })
    }
}

impl From<Uuid> for CanonicalUuid {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<CanonicalUuid> for Uuid {
    fn from(value: CanonicalUuid) -> Self {
        value.0
    }
}

impl fmt::Display for CanonicalUuid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for CanonicalUuid {
    type Err = UuidError;

    /// Equivalent to [`CanonicalUuid::parse`].
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CanonicalUuid::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_strips_braces_and_dashes() {
        let hex = normalize("{00112233-4455-6677-8899-aabbccddeeff}").unwrap();
        assert_eq!(hex, "00112233445566778899aabbccddeeff");
    }

    #[test]
    fn test_normalize_lowercases() {
        let hex = normalize("1B06B4BD-B801-45A0-A61C-A2273D6DF494").unwrap();
        assert_eq!(hex, "1b06b4bdb80145a0a61ca2273d6df494");
    }

    #[test]
    fn test_normalize_trims_whitespace() {
        let hex = normalize("  00112233445566778899aabbccddeeff\n").unwrap();
        assert_eq!(hex, "00112233445566778899aabbccddeeff");
    }

    #[test]
    fn test_normalize_rejects_too_short() {
        let result = normalize("00112233-4455-6677-8899-aabbccddeef");

        match result {
            Err(UuidError::MalformedInput(msg)) => {
                assert!(msg.contains("32 hex digits"));
            }
            _ => panic!("Expected MalformedInput error"),
        }
    }

    #[test]
    fn test_normalize_rejects_too_long() {
        assert!(normalize("00112233-4455-6677-8899-aabbccddeeff0").is_err());
    }

    #[test]
    fn test_normalize_rejects_non_hex() {
        assert!(normalize("00112233-4455-6677-8899-aabbccddeezz").is_err());
    }

    #[test]
    fn test_normalize_rejects_non_ascii() {
        // 30 hex digits plus one two-byte character is 32 bytes long.
        assert!(normalize("00112233445566778899aabbccddeeé").is_err());
    }

    #[test]
    fn test_normalize_rejects_empty() {
        assert!(normalize("").is_err());
        assert!(normalize("{-}").is_err());
    }

    #[test]
    fn test_parse_and_display() {
        let uuid = CanonicalUuid::parse("{00112233-4455-6677-8899-AABBCCDDEEFF}").unwrap();
        assert_eq!(uuid.to_string(), "00112233-4455-6677-8899-aabbccddeeff");
        assert_eq!(uuid.simple(), "00112233445566778899aabbccddeeff");
    }

    #[test]
    fn test_parse_bytes_are_network_order() {
        let uuid = CanonicalUuid::parse("00112233-4455-6677-8899-aabbccddeeff").unwrap();
        assert_eq!(
            uuid.as_bytes(),
            &[
                0x00, 0x11, 0x22, 0x33, 0x44, 0x55, 0x66, 0x77, 0x88, 0x99, 0xaa, 0xbb, 0xcc,
                0xdd, 0xee, 0xff
            ]
        );
    }

    #[test]
    fn test_from_str() {
        let result: Result<CanonicalUuid, _> = "1b06b4bdb80145a0a61ca2273d6df494".parse();
        assert_eq!(
            result.unwrap().to_string(),
            "1b06b4bd-b801-45a0-a61c-a2273d6df494"
        );

        let invalid: Result<CanonicalUuid, _> = "not-a-uuid".parse();
        assert!(invalid.is_err());
    }

    #[test]
    fn test_uuid_conversion() {
        let inner = Uuid::from_u128(0x00112233_4455_6677_8899_aabbccddeeff);
        let wrapped = CanonicalUuid::from(inner);
        assert_eq!(wrapped.uuid(), inner);
        assert_eq!(Uuid::from(wrapped), inner);
    }

    #[test]
    fn test_is_canonical() {
        assert!(CanonicalUuid::is_canonical(
            "00112233-4455-6677-8899-aabbccddeeff"
        ));
        assert!(!CanonicalUuid::is_canonical(
            "00112233-4455-6677-8899-AABBCCDDEEFF"
        ));
        assert!(!CanonicalUuid::is_canonical(
            "{00112233-4455-6677-8899-aabbccddeeff}"
        ));
        assert!(!CanonicalUuid::is_canonical(
            "00112233445566778899aabbccddeeff"
        ));
        assert!(!CanonicalUuid::is_canonical(
            "0011223-34455-6677-8899-aabbccddeeff"
        ));
        assert!(!CanonicalUuid::is_canonical(""));
    }

    #[test]
    fn test_display_is_canonical() {
        let uuid = CanonicalUuid::from_bytes([0xab; 16]);
        assert!(CanonicalUuid::is_canonical(&uuid.to_string()));
    }
}
