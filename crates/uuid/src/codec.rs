//! Encode and decode operations for each UUID encoding.
//!
//! Encoding: text → [`CanonicalUuid`] → permuted bytes → base64 → container.
//! Decoding: container → 16 payload bytes → un-permuted bytes → tagged display string.
//!
//! Decoding never inspects the subtype to pick an encoding. Subtype 3 is shared by all legacy
//! drivers, so the caller always names the variant. [`decode_strict`] additionally checks that
//! the subtype agrees with that variant.

use crate::binary::uuid_payload;
use crate::variant::parse_variant;
use crate::{
    display, permute, transcode, BinaryContainer, CanonicalUuid, EncodedValue, EncodingVariant,
    UuidError, UuidResult,
};

/// Encodes UUID text under `variant` into any host container.
///
/// # Errors
///
/// Returns [`UuidError::MalformedInput`] if `text` is not a UUID, or whatever error the
/// container's constructor reports.
pub fn encode_into<C: BinaryContainer>(variant: EncodingVariant, text: &str) -> UuidResult<C> {
    let uuid = CanonicalUuid::parse(text)?;
    let stored = permute::forward(variant, uuid.as_bytes());
    let payload = transcode::bytes_to_base64(&stored);
    tracing::trace!(%variant, %uuid, %payload, "encoded UUID");
    C::from_parts(variant.subtype(), &payload)
}

/// Encodes UUID text under `variant`.
///
/// # Errors
///
/// Returns [`UuidError::MalformedInput`] if `text` is not a UUID.
pub fn encode(variant: EncodingVariant, text: &str) -> UuidResult<EncodedValue> {
    encode_into(variant, text)
}

/// Recovers the canonical UUID from a stored value, reading it as `variant`.
///
/// # Errors
///
/// Returns [`UuidError::InvalidPayloadLength`] if the payload is not 16 bytes.
pub fn decode_uuid<C: BinaryContainer>(
    variant: EncodingVariant,
    value: &C,
) -> UuidResult<CanonicalUuid> {
    let stored = uuid_payload(value)?;
    Ok(CanonicalUuid::from_bytes(permute::backward(variant, &stored)))
}

/// Decodes a stored value as `variant` and returns the tagged display string.
///
/// For example `CSUUID("00112233-4455-6677-8899-aabbccddeeff")`.
///
/// # Errors
///
/// Returns [`UuidError::InvalidPayloadLength`] if the payload is not 16 bytes.
pub fn decode<C: BinaryContainer>(variant: EncodingVariant, value: &C) -> UuidResult<String> {
    let uuid = decode_uuid(variant, value)?;
    Ok(display::wrap(variant, &uuid))
}

/// Like [`decode`], but first requires the value's subtype to equal `variant`'s subtype.
///
/// # Errors
///
/// Returns [`UuidError::SubtypeMismatch`] if the subtypes differ.
pub fn decode_strict<C: BinaryContainer>(
    variant: EncodingVariant,
    value: &C,
) -> UuidResult<String> {
    let expected = variant.subtype();
    let actual = value.subtype();
    if expected != actual {
        tracing::debug!(%variant, expected, actual, "subtype does not match variant");
        return Err(UuidError::SubtypeMismatch { expected, actual });
    }
    decode(variant, value)
}

/// Decodes a stored value using a variant given by name.
///
/// Accepts anything [`EncodingVariant`]'s `FromStr` accepts.
///
/// # Errors
///
/// Returns [`UuidError::UnknownVariant`] if `name` is not a supported variant.
pub fn decode_named<C: BinaryContainer>(name: &str, value: &C) -> UuidResult<String> {
    let variant = parse_variant(name)?;
    decode(variant, value)
}

/// Shows the stored bytes and subtype without interpreting them, e.g.
/// `HexData(3, "33221100-5544-7766-8899-aabbccddeeff")`.
///
/// # Errors
///
/// Returns [`UuidError::InvalidPayloadLength`] if the payload is not 16 bytes.
pub fn decode_raw<C: BinaryContainer>(value: &C) -> UuidResult<String> {
    let stored = uuid_payload(value)?;
    Ok(display::hex_data(value.subtype(), &stored))
}

pub fn encode_standard(text: &str) -> UuidResult<EncodedValue> {
    encode(EncodingVariant::Standard, text)
}

pub fn encode_java_legacy(text: &str) -> UuidResult<EncodedValue> {
    encode(EncodingVariant::JavaLegacy, text)
}

pub fn encode_csharp_legacy(text: &str) -> UuidResult<EncodedValue> {
    encode(EncodingVariant::CSharpLegacy, text)
}

pub fn encode_python_legacy(text: &str) -> UuidResult<EncodedValue> {
    encode(EncodingVariant::PythonLegacy, text)
}

pub fn decode_standard<C: BinaryContainer>(value: &C) -> UuidResult<String> {
    decode(EncodingVariant::Standard, value)
}

pub fn decode_java_legacy<C: BinaryContainer>(value: &C) -> UuidResult<String> {
    decode(EncodingVariant::JavaLegacy, value)
}

pub fn decode_csharp_legacy<C: BinaryContainer>(value: &C) -> UuidResult<String> {
    decode(EncodingVariant::CSharpLegacy, value)
}

pub fn decode_python_legacy<C: BinaryContainer>(value: &C) -> UuidResult<String> {
    decode(EncodingVariant::PythonLegacy, value)
}
