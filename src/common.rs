//! Shared constants and error handling for the timestamp48 encoding
//!
//! This module defines the Base64URL alphabet table, the fixed buffer sizes,
//! and the error type shared by the encoding entry points.

use core::fmt;

// =============================================================================
// SIZE CONSTANTS
// =============================================================================

/// Fixed sizes of the encoding, in bytes/characters
pub mod sizes {
    /// Packed timestamp size (48 bits, big-endian)
    pub const TIMESTAMP: usize = 6;
    /// Encoded string length (8 sextets, no padding)
    pub const ENCODED: usize = 8;
}

// =============================================================================
// ALPHABET
// =============================================================================

/// Base64URL alphabet, index 0-63.
///
/// Indices 0-25 map to `A`-`Z`, 26-51 to `a`-`z`, 52-61 to `0`-`9`,
/// 62 to `-` and 63 to `_`. Built as a compile-time table so it is never
/// reconstructed per call.
///
/// Note: index order is NOT ASCII code-point order (`'0'` sorts below `'A'`
/// in ASCII but carries index 52). Encoded strings sort by timestamp under
/// comparison by alphabet index; plain byte-wise string comparison only
/// agrees where the compared characters fall inside one contiguous run of
/// the alphabet.
pub const BASE64URL_ALPHABET: [u8; 64] =
    *b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789-_";

// =============================================================================
// ERROR HANDLING
// =============================================================================

/// Custom error type for timestamp48 operations.
#[derive(Debug, PartialEq)]
pub enum Timestamp48Error {
    /// Error indicating a byte buffer is not exactly the packed timestamp size.
    InvalidLength {
        /// The expected buffer length.
        expected: usize,
        /// The actual buffer length.
        actual: usize,
    },
}

impl fmt::Display for Timestamp48Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Timestamp48Error::InvalidLength { expected, actual } => {
                write!(f, "Invalid buffer length: expected {}, got {}", expected, actual)
            }
        }
    }
}

impl std::error::Error for Timestamp48Error {}
