//! Byte permutations applied by each encoding before the payload is stored.
//!
//! Every permutation here only moves bytes; none depends on byte values. Each one is also its
//! own inverse, so [`forward`] and [`backward`] share a single implementation.
//!
//! Positions of the canonical bytes in the stored payload:
//!
//! ```text
//! Standard / PythonLegacy:  0 1 2 3  4 5  6 7  8 9 a b c d e f
//! JavaLegacy:               7 6 5 4  3 2  1 0  f e d c b a 9 8
//! CSharpLegacy:             3 2 1 0  5 4  7 6  8 9 a b c d e f
//! ```

use crate::{EncodingVariant, UuidBytes};

/// Reorders `bytes` according to `variant`.
pub fn permute(variant: EncodingVariant, bytes: &UuidBytes) -> UuidBytes {
    match variant {
        EncodingVariant::Standard | EncodingVariant::PythonLegacy => *bytes,
        EncodingVariant::JavaLegacy => java_legacy(bytes),
        EncodingVariant::CSharpLegacy => csharp_legacy(bytes),
    }
}

/// Canonical bytes to stored bytes.
pub fn forward(variant: EncodingVariant, canonical: &UuidBytes) -> UuidBytes {
    permute(variant, canonical)
}

/// Stored bytes to canonical bytes.
pub fn backward(variant: EncodingVariant, stored: &UuidBytes) -> UuidBytes {
    permute(variant, stored)
}

/// Reverses the most and least significant 8-byte halves independently.
fn java_legacy(bytes: &UuidBytes) -> UuidBytes {
    let mut out = *bytes;
    out[..8].reverse();
    out[8..].reverse();
    out
}

/// Reverses the 4-byte, 2-byte and 2-byte GUID fields; the trailing 8 bytes stay put.
fn csharp_legacy(bytes: &UuidBytes) -> UuidBytes {
    let mut out = *bytes;
    out[0..4].reverse();
    out[4..6].reverse();
    out[6..8].reverse();
    out
}
