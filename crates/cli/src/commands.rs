//! Command handlers.
//!
//! Each handler takes parsed arguments and returns the text to print, so the conversions can be
//! tested without spawning the binary.

use crate::config::OutputFormat;
use anyhow::Context;
use bindata_uuid::{codec, strings, EncodedValue, EncodingVariant};

/// Parses a stored value given as a `BinData(…)` literal, Extended JSON, or a bare base64 payload.
///
/// Literals and Extended JSON carry their own subtype. A bare payload takes `subtype`.
pub fn parse_encoded(input: &str, subtype: u8) -> anyhow::Result<EncodedValue> {
    let trimmed = input.trim();

    if trimmed.starts_with("BinData(") {
        tracing::debug!("reading BinData literal");
        return EncodedValue::parse_bin_data(trimmed).context("invalid BinData literal");
    }

    if trimmed.starts_with('{') {
        tracing::debug!("reading Extended JSON binary");
        return serde_json::from_str(trimmed).context("invalid Extended JSON binary");
    }

    EncodedValue::new(subtype, trimmed).context("invalid base64 payload")
}

/// `buuid encode`
pub fn encode(text: &str, variant: EncodingVariant, output: OutputFormat) -> anyhow::Result<String> {
    let value = codec::encode(variant, text)
        .with_context(|| format!("failed to encode '{}' as {}", text, variant))?;

    match output {
        OutputFormat::Shell => Ok(value.to_string()),
        OutputFormat::Json => serde_json::to_string(&value).context("failed to write Extended JSON"),
    }
}

/// `buuid decode`
///
/// With `strict`, the value's subtype must match the variant.
pub fn decode(
    input: &str,
    variant: EncodingVariant,
    subtype: Option<u8>,
    strict: bool,
) -> anyhow::Result<String> {
    let value = parse_encoded(input, subtype.unwrap_or(variant.subtype()))?;

    if !strict && value.subtype() != variant.subtype() {
        tracing::warn!(
            %variant,
            subtype = value.subtype(),
            "decoding with a variant whose subtype differs from the stored subtype"
        );
    }

    let decoded = if strict {
        codec::decode_strict(variant, &value)
    } else {
        codec::decode(variant, &value)
    };
    decoded.with_context(|| format!("failed to decode as {}", variant))
}

/// `buuid hex`
pub fn hex(input: &str, subtype: u8) -> anyhow::Result<String> {
    let value = parse_encoded(input, subtype)?;
    codec::decode_raw(&value).context("failed to read stored bytes")
}

/// `buuid show`: every variant's decoded form, then every variant's stored bytes.
pub fn show(text: &str) -> anyhow::Result<String> {
    let values = EncodingVariant::ALL
        .into_iter()
        .map(|variant| Ok((variant, codec::encode(variant, text)?)))
        .collect::<bindata_uuid::UuidResult<Vec<_>>>()
        .with_context(|| format!("failed to encode '{}'", text))?;

    let mut lines = Vec::with_capacity(values.len() * 2);
    for (variant, value) in &values {
        lines.push(codec::decode(*variant, value)?);
    }
    for (_, value) in &values {
        lines.push(codec::decode_raw(value)?);
    }

    Ok(lines.join("\n"))
}

/// `buuid to-base64`
pub fn to_base64(text: &str) -> anyhow::Result<String> {
    strings::text_to_encoded_base64(text).with_context(|| format!("failed to encode '{}'", text))
}

/// `buuid to-bin-data`
pub fn to_bin_data(text: &str) -> anyhow::Result<String> {
    strings::text_to_bin_data_string(text).with_context(|| format!("failed to encode '{}'", text))
}

/// `buuid variants`
pub fn variants() -> String {
    EncodingVariant::ALL
        .iter()
        .map(|variant| {
            format!(
                "{:<14}{:<8}{}",
                variant.name(),
                variant.display_tag(),
                variant.subtype()
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
