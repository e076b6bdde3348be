//! Hex and base64 conversion for 16-byte payloads.
//!
//! Base64 uses the standard alphabet (`A-Z a-z 0-9 + /`) with `=` padding. Sixteen bytes are
//! five full 3-byte groups plus one trailing byte, so every encoded payload is 24 characters
//! ending in `==`.

use crate::{UuidBytes, UuidError, UuidResult, UUID_LEN};
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Length of a base64-encoded 16-byte payload.
pub const BASE64_LEN: usize = 24;

/// Length of a hex-encoded 16-byte payload.
pub const HEX_LEN: usize = UUID_LEN * 2;

/// Encodes 16 bytes as padded standard base64.
pub fn bytes_to_base64(bytes: &UuidBytes) -> String {
    STANDARD.encode(bytes)
}

/// Decodes a padded standard base64 string into exactly 16 bytes.
///
/// # Errors
///
/// Returns [`UuidError::InvalidBase64`] if the input is not 24 characters, uses characters
/// outside the standard alphabet, has non-canonical padding or trailing bits, or does not
/// decode to 16 bytes.
pub fn base64_to_bytes(input: &str) -> UuidResult<UuidBytes> {
    if input.len() != BASE64_LEN {
        return Err(UuidError::InvalidBase64(format!(
            "expected {} characters, got {}: '{}'",
            BASE64_LEN,
            input.len(),
            input
        )));
    }

    let decoded = STANDARD
        .decode(input)
        .map_err(|e| UuidError::InvalidBase64(format!("'{}': {}", input, e)))?;

    UuidBytes::try_from(decoded.as_slice()).map_err(|_| {
        UuidError::InvalidBase64(format!(
            "expected {} decoded bytes, got {}: '{}'",
            UUID_LEN,
            decoded.len(),
            input
        ))
    })
}

/// Encodes 16 bytes as 32 lowercase hex digits.
pub fn bytes_to_hex(bytes: &UuidBytes) -> String {
    hex::encode(bytes)
}

/// Decodes 32 hex digits (either case) into 16 bytes.
///
/// # Errors
///
/// Returns [`UuidError::MalformedInput`] if the input is not exactly 32 hex digits.
pub fn hex_to_bytes(input: &str) -> UuidResult<UuidBytes> {
    let mut bytes = [0u8; UUID_LEN];
    hex::decode_to_slice(input, &mut bytes)
        .map_err(|e| UuidError::MalformedInput(format!("'{}': {}", input, e)))?;
    Ok(bytes)
}

/// Converts 32 hex digits straight to base64.
pub fn hex_to_base64(input: &str) -> UuidResult<String> {
    Ok(bytes_to_base64(&hex_to_bytes(input)?))
}

/// Converts a base64 payload straight to 32 lowercase hex digits.
pub fn base64_to_hex(input: &str) -> UuidResult<String> {
    Ok(bytes_to_hex(&base64_to_bytes(input)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    const SAMPLE_HEX: &str = "00112233445566778899aabbccddeeff";
    const SAMPLE_BASE64: &str = "ABEiM0RVZneImaq7zN3u/w==";

    #[test]
    fn test_hex_to_base64_known_value() {
        assert_eq!(hex_to_base64(SAMPLE_HEX).unwrap(), SAMPLE_BASE64);
    }

    #[test]
    fn test_base64_to_hex_known_value() {
        assert_eq!(base64_to_hex(SAMPLE_BASE64).unwrap(), SAMPLE_HEX);
    }

    #[test]
    fn test_base64_of_all_zero_and_all_ones() {
        assert_eq!(bytes_to_base64(&[0u8; 16]), "AAAAAAAAAAAAAAAAAAAAAA==");
        assert_eq!(bytes_to_base64(&[0xffu8; 16]), "/////////////////////w==");
    }

    #[test]
    fn test_hex_output_is_lowercase_zero_padded() {
        let mut bytes = [0u8; 16];
        bytes[0] = 0x0a;
        bytes[15] = 0xf0;
        assert_eq!(bytes_to_hex(&bytes), "0a0000000000000000000000000000f0");
    }

    #[test]
    fn test_hex_accepts_uppercase() {
        assert_eq!(
            hex_to_bytes("00112233445566778899AABBCCDDEEFF").unwrap(),
            hex_to_bytes(SAMPLE_HEX).unwrap()
        );
    }

    #[test]
    fn test_hex_rejects_wrong_length() {
        match hex_to_bytes("0011") {
            Err(UuidError::MalformedInput(_)) => {}
            other => panic!("Expected MalformedInput error, got {:?}", other),
        }
    }

    #[test]
    fn test_hex_rejects_invalid_characters() {
        assert!(hex_to_bytes("00112233445566778899aabbccddeegg").is_err());
    }

    #[test]
    fn test_base64_rejects_wrong_length() {
        match base64_to_bytes("ABEiM0RVZneImaq7zN3u") {
            Err(UuidError::InvalidBase64(msg)) => assert!(msg.contains("expected 24 characters")),
            other => panic!("Expected InvalidBase64 error, got {:?}", other),
        }
    }

    #[test]
    fn test_base64_rejects_invalid_characters() {
        assert!(base64_to_bytes("ABEiM0RVZneImaq7zN3u_w==").is_err());
        assert!(base64_to_bytes("ABEiM0RVZneImaq7zN3u-w==").is_err());
        assert!(base64_to_bytes("ABEiM0RVZneImaq7zN3u!w==").is_err());
    }

    #[test]
    fn test_base64_rejects_missing_padding() {
        // 24 characters but padding replaced with data: decodes to 18 bytes.
        match base64_to_bytes("ABEiM0RVZneImaq7zN3u/wAA") {
            Err(UuidError::InvalidBase64(msg)) => assert!(msg.contains("decoded bytes")),
            other => panic!("Expected InvalidBase64 error, got {:?}", other),
        }
    }

    #[test]
    fn test_base64_rejects_misplaced_padding() {
        assert!(base64_to_bytes("ABEiM0RVZneImaq7zN3u/=w=").is_err());
        assert!(base64_to_bytes("ABEiM0RVZneImaq7zN3u/w=A").is_err());
    }

    #[test]
    fn test_base64_rejects_non_zero_trailing_bits() {
        // '/x' sets low bits that do not belong to the final byte.
        assert!(base64_to_bytes("ABEiM0RVZneImaq7zN3u/x==").is_err());
    }

    proptest! {
        #[test]
        fn prop_base64_shape(bytes in any::<[u8; 16]>()) {
            let encoded = bytes_to_base64(&bytes);
            prop_assert_eq!(encoded.len(), BASE64_LEN);
            prop_assert!(encoded.ends_with("=="));
            prop_assert_eq!(base64_to_bytes(&encoded).unwrap(), bytes);
        }

        #[test]
        fn prop_hex_shape(bytes in any::<[u8; 16]>()) {
            let encoded = bytes_to_hex(&bytes);
            prop_assert_eq!(encoded.len(), HEX_LEN);
            prop_assert!(encoded.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')));
            prop_assert_eq!(hex_to_bytes(&encoded).unwrap(), bytes);
        }
    }
}
