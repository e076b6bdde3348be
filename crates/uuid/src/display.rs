//! Shell-style presentation of UUIDs and stored payloads.
//!
//! - `UUID("…")`, `JUUID("…")`, `CSUUID("…")`, `PYUUID("…")` show a canonical UUID together
//!   with the encoding it was decoded through.
//! - `HexData(<subtype>, "…")` shows the stored bytes as they are, without undoing any
//!   permutation.

use crate::{CanonicalUuid, EncodingVariant, UuidBytes, UuidError, UuidResult};
use uuid::Uuid;

/// Formats any 16 bytes as lowercase 8-4-4-4-12 hex.
pub fn format_grouped(bytes: &UuidBytes) -> String {
    Uuid::from_bytes(*bytes).hyphenated().to_string()
}

/// Wraps a UUID in the display tag of `variant`, e.g. `CSUUID("…")`.
pub fn wrap(variant: EncodingVariant, uuid: &CanonicalUuid) -> String {
    format!("{}(\"{}\")", variant.display_tag(), uuid)
}

/// Formats stored bytes as `HexData(<subtype>, "<grouped hex>")`.
pub fn hex_data(subtype: u8, stored: &UuidBytes) -> String {
    format!("HexData({}, \"{}\")", subtype, format_grouped(stored))
}

/// Returns the text between a single pair of quotes, or `input` unchanged.
///
/// Either `"` or `'` counts as a quote. Input with no quotes, or with more than one pair, is
/// returned as is.
pub fn unquote(input: &str) -> &str {
    let mut parts = input.split(['"', '\'']);
    match (parts.next(), parts.next(), parts.next(), parts.next()) {
        (Some(_), Some(inner), Some(_), None) => inner,
        _ => input,
    }
}

/// Parses a tagged display string such as `CSUUID("00112233-4455-6677-8899-aabbccddeeff")`.
///
/// The tag must match exactly (`UUID`, `JUUID`, `CSUUID` or `PYUUID`) and the UUID must be
/// quoted with `"` or `'`.
///
/// # Errors
///
/// Returns [`UuidError::UnknownVariant`] for an unrecognised tag, and
/// [`UuidError::MalformedInput`] if the text is not `TAG("…")` or the UUID is malformed.
pub fn parse_tagged(input: &str) -> UuidResult<(EncodingVariant, CanonicalUuid)> {
    let malformed = || {
        UuidError::MalformedInput(format!("expected TAG(\"<uuid>\"), got: '{}'", input))
    };

    let trimmed = input.trim();
    let (tag, rest) = trimmed.split_once('(').ok_or_else(malformed)?;
    let inner = rest.strip_suffix(')').ok_or_else(malformed)?.trim();

    let variant = EncodingVariant::from_display_tag(tag.trim())
        .ok_or_else(|| UuidError::UnknownVariant(tag.trim().to_string()))?;

    let quoted = inner.len() >= 2
        && ((inner.starts_with('"') && inner.ends_with('"'))
            || (inner.starts_with('\'') && inner.ends_with('\'')));
    if !quoted {
        return Err(malformed());
    }

    let uuid = CanonicalUuid::parse(&inner[1..inner.len() - 1])?;
    Ok((variant, uuid))
}
