//! 48-bit timestamp packing and Base64URL encoding
//!
//! This module implements the three-stage pipeline behind an encoded
//! timestamp: millisecond value -> 6 big-endian bytes -> 8 Base64URL
//! characters. All functions are pure; the orchestrator reads the wall
//! clock once when no explicit timestamp is supplied.

use chrono::Utc;

use crate::common::{sizes, Timestamp48Error, BASE64URL_ALPHABET};

/// 2^48 as f64; exact, since it is a power of two well below the mantissa limit
const TWO_POW_48: f64 = 281_474_976_710_656.0;

// =============================================================================
// PACKER
// =============================================================================

/// Pack a millisecond timestamp into 6 big-endian bytes (48 bits).
///
/// The input is normalized rather than rejected: non-finite values become 0,
/// fractional values are floored (toward negative infinity), and anything
/// outside `[0, 2^48)` is reduced modulo 2^48. Negative inputs therefore wrap
/// into a 48-bit pattern via floor + Euclidean modulo; that behavior is kept
/// for parity with the historical encoding and is not meaningful for real
/// pre-1970 epoch times.
///
/// # Arguments
/// * `ms` - Milliseconds since the Unix epoch (will be truncated to 48 bits)
///
/// # Returns
/// 6-byte array, byte 0 most significant
#[inline]
pub fn millis_to_48be(ms: f64) -> [u8; sizes::TIMESTAMP] {
    let ms = if ms.is_finite() { ms.floor() } else { 0.0 };
    // rem_euclid is exact here: after floor the value is integral, and the
    // result fits in 48 bits, below the f64 integer precision limit.
    let truncated = ms.rem_euclid(TWO_POW_48) as u64;

    let be_bytes = truncated.to_be_bytes();
    let mut bytes = [0u8; sizes::TIMESTAMP];
    bytes.copy_from_slice(&be_bytes[2..8]);
    bytes
}

// =============================================================================
// ENCODER
// =============================================================================

/// Encode 6 bytes into 8 Base64URL characters (no padding).
///
/// The 48 input bits are regrouped MSB-first into 8 sextets; each sextet
/// indexes [`BASE64URL_ALPHABET`]. 48 divides evenly by 6, so no padding
/// bits exist. The fixed-size input makes the length precondition a
/// compile-time fact; see [`encode_48be_slice`] for the checked slice form.
///
/// # Arguments
/// * `bytes` - Packed 48-bit timestamp, big-endian
///
/// # Returns
/// 8-character Base64URL string
#[inline]
pub fn encode_48be(bytes: &[u8; sizes::TIMESTAMP]) -> String {
    let [b0, b1, b2, b3, b4, b5] = *bytes;

    let out = [
        BASE64URL_ALPHABET[(b0 >> 2) as usize],
        BASE64URL_ALPHABET[(((b0 & 0x03) << 4) | (b1 >> 4)) as usize],
        BASE64URL_ALPHABET[(((b1 & 0x0F) << 2) | (b2 >> 6)) as usize],
        BASE64URL_ALPHABET[(b2 & 0x3F) as usize],
        BASE64URL_ALPHABET[(b3 >> 2) as usize],
        BASE64URL_ALPHABET[(((b3 & 0x03) << 4) | (b4 >> 4)) as usize],
        BASE64URL_ALPHABET[(((b4 & 0x0F) << 2) | (b5 >> 6)) as usize],
        BASE64URL_ALPHABET[(b5 & 0x3F) as usize],
    ];

    // The alphabet is pure ASCII, so the buffer is always valid UTF-8.
    unsafe { core::str::from_utf8_unchecked(&out) }.to_owned()
}

/// Encode a byte slice into 8 Base64URL characters, validating its length.
///
/// # Arguments
/// * `bytes` - Byte slice; must be exactly 6 bytes long
///
/// # Returns
/// Result containing the 8-character string, or `InvalidLength` if the slice
/// is not exactly 6 bytes
pub fn encode_48be_slice(bytes: &[u8]) -> Result<String, Timestamp48Error> {
    if bytes.len() != sizes::TIMESTAMP {
        return Err(Timestamp48Error::InvalidLength {
            expected: sizes::TIMESTAMP,
            actual: bytes.len(),
        });
    }

    let mut buf = [0u8; sizes::TIMESTAMP];
    buf.copy_from_slice(bytes);
    Ok(encode_48be(&buf))
}

// =============================================================================
// ORCHESTRATOR
// =============================================================================

/// Generate an 8-character Base64URL string from a millisecond timestamp.
///
/// This is the public entry point. Passing `None` reads the wall clock once
/// (current milliseconds since the Unix epoch). Composition of
/// [`millis_to_48be`] then [`encode_48be`], with no additional logic.
///
/// # Arguments
/// * `now` - Optional millisecond timestamp; defaults to the current time
///
/// # Returns
/// 8-character Base64URL string
pub fn generate_timestamp48(now: Option<f64>) -> String {
    let ms = now.unwrap_or_else(|| Utc::now().timestamp_millis() as f64);
    encode_48be(&millis_to_48be(ms))
}
