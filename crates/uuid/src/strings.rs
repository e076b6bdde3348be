//! String-level shortcuts for the C# legacy encoding.
//!
//! These accept the forms people paste from a shell session: bare UUIDs, braced UUIDs, quoted
//! UUIDs and tagged literals such as `CSUUID("…")`. The tag itself is ignored; the quoted text
//! is always encoded as `CSharpLegacy` under subtype 3.

use crate::display::unquote;
use crate::{codec, EncodedValue, EncodingVariant, UuidResult};

/// Encoding used by every helper in this module.
pub const HELPER_VARIANT: EncodingVariant = EncodingVariant::CSharpLegacy;

/// Encodes UUID text as `CSharpLegacy` and returns the subtype 3 value.
///
/// # Errors
///
/// Returns [`crate::UuidError::MalformedInput`] if the unquoted text is not a UUID.
pub fn text_to_encoded_value(text: &str) -> UuidResult<EncodedValue> {
    codec::encode(HELPER_VARIANT, unquote(text))
}

/// Encodes UUID text as `CSharpLegacy` and returns just the base64 payload.
///
/// # Errors
///
/// Returns [`crate::UuidError::MalformedInput`] if the unquoted text is not a UUID.
pub fn text_to_encoded_base64(text: &str) -> UuidResult<String> {
    let value = text_to_encoded_value(text)?;
    Ok(value.to_base64())
}

/// Encodes UUID text as `CSharpLegacy` and returns the shell literal, e.g.
/// `BinData(3, "vbQGGwG4oEWmHKInPW30lA==")`.
///
/// # Errors
///
/// Returns [`crate::UuidError::MalformedInput`] if the unquoted text is not a UUID.
pub fn text_to_bin_data_string(text: &str) -> UuidResult<String> {
    let value = text_to_encoded_value(text)?;
    Ok(value.to_string())
}
