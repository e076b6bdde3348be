//! Registry of supported UUID binary encodings.

use crate::{UuidError, UuidResult};
use std::{fmt, str::FromStr};

/// Binary subtype shared by all legacy driver encodings.
pub const BINARY_SUBTYPE_UUID_OLD: u8 = 3;

/// Binary subtype of the standard (RFC 4122 byte order) encoding.
pub const BINARY_SUBTYPE_UUID: u8 = 4;

/// One of the four UUID binary encodings.
///
/// Each variant pairs a subtype tag with a fixed byte permutation (see [`crate::permute`]).
/// The set is closed: new encodings are added here, not registered at runtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EncodingVariant {
    /// Subtype 4, network byte order.
    Standard,
    /// Subtype 3, as written by the legacy Java driver.
    JavaLegacy,
    /// Subtype 3, as written by the legacy C# driver.
    CSharpLegacy,
    /// Subtype 3, as written by the legacy Python driver.
    PythonLegacy,
}

impl EncodingVariant {
    /// All variants, in registry order.
    pub const ALL: [EncodingVariant; 4] = [
        EncodingVariant::Standard,
        EncodingVariant::JavaLegacy,
        EncodingVariant::CSharpLegacy,
        EncodingVariant::PythonLegacy,
    ];

    /// Returns the binary subtype this variant is stored under.
    pub const fn subtype(self) -> u8 {
        match self {
            EncodingVariant::Standard => BINARY_SUBTYPE_UUID,
            EncodingVariant::JavaLegacy
            | EncodingVariant::CSharpLegacy
            | EncodingVariant::PythonLegacy => BINARY_SUBTYPE_UUID_OLD,
        }
    }

    /// Returns the variant name, e.g. `"CSharpLegacy"`.
    pub const fn name(self) -> &'static str {
        match self {
            EncodingVariant::Standard => "Standard",
            EncodingVariant::JavaLegacy => "JavaLegacy",
            EncodingVariant::CSharpLegacy => "CSharpLegacy",
            EncodingVariant::PythonLegacy => "PythonLegacy",
        }
    }

    /// Returns the shell display tag, e.g. `"CSUUID"`.
    pub const fn display_tag(self) -> &'static str {
        match self {
            EncodingVariant::Standard => "UUID",
            EncodingVariant::JavaLegacy => "JUUID",
            EncodingVariant::CSharpLegacy => "CSUUID",
            EncodingVariant::PythonLegacy => "PYUUID",
        }
    }

    /// Returns true if this variant is one of the subtype 3 driver encodings.
    pub const fn is_legacy(self) -> bool {
        self.subtype() == BINARY_SUBTYPE_UUID_OLD
    }

    /// Returns every variant that stores values under `subtype`.
    ///
    /// Subtype 3 yields all three legacy variants: the stored bytes alone cannot tell them
    /// apart, so callers must pick one themselves. Unknown subtypes yield an empty list.
    pub fn candidates_for_subtype(subtype: u8) -> Vec<EncodingVariant> {
        Self::ALL
            .into_iter()
            .filter(|variant| variant.subtype() == subtype)
            .collect()
    }

    /// Looks up a variant by its display tag (`UUID`, `JUUID`, `CSUUID`, `PYUUID`).
    ///
    /// Matching is exact; this is used when parsing shell literals.
    pub fn from_display_tag(tag: &str) -> Option<EncodingVariant> {
        Self::ALL
            .into_iter()
            .find(|variant| variant.display_tag() == tag)
    }
}

impl fmt::Display for EncodingVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EncodingVariant {
    type Err = UuidError;

    /// Parses a variant name, display tag or driver alias, ignoring case.
    ///
    /// # Errors
    ///
    /// Returns [`UuidError::UnknownVariant`] if `s` names none of the four variants.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_ascii_lowercase();
        let variant = match key.as_str() {
            "standard" | "uuid" => EncodingVariant::Standard,
            "javalegacy" | "juuid" | "java" => EncodingVariant::JavaLegacy,
            "csharplegacy" | "csuuid" | "csharp" | "c#" => EncodingVariant::CSharpLegacy,
            "pythonlegacy" | "pyuuid" | "python" => EncodingVariant::PythonLegacy,
            _ => return Err(UuidError::UnknownVariant(s.to_string())),
        };
        Ok(variant)
    }
}

/// Parses a variant name, returning a typed error on failure.
///
/// This is the dispatch boundary for callers holding a variant as a string.
pub fn parse_variant(name: &str) -> UuidResult<EncodingVariant> {
    name.parse()
}
