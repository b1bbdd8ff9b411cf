//! 48-bit (UUIDv7-style) millisecond timestamp encoded as 8-char Base64URL
//!
//! Encodes milliseconds since the Unix epoch, truncated to 48 bits, into an
//! 8-character Base64URL string with no padding. Encoded strings sort by
//! timestamp under the alphabet's index order, which makes the output
//! suitable as the leading segment of UUIDv7-style identifiers.
//!
//! # Encoding details
//! - 48-bit big-endian milliseconds since the Unix epoch.
//! - 6 bytes -> 8 Base64URL characters, MSB-first sextets, no padding.
//! - Alphabet: `A-Z a-z 0-9 - _` (index 0-63).
//!
//! # Quick Start
//!
//! ```rust
//! use timestamp48::generate_timestamp48;
//!
//! // Encode an explicit millisecond timestamp
//! assert_eq!(generate_timestamp48(Some(0.0)), "AAAAAAAA");
//! assert_eq!(generate_timestamp48(Some(1.0)), "AAAAAAAB");
//!
//! // Or take the current wall-clock time
//! let id = generate_timestamp48(None);
//! assert_eq!(id.len(), 8);
//! ```

#![warn(missing_debug_implementations)]

// =============================================================================
// MODULE DECLARATIONS
// =============================================================================

/// Alphabet table, size constants, and error type
pub mod common;
/// Timestamp packing, Base64URL encoding, and the public entry point
pub mod timestamp;

// Re-export public API
pub use crate::common::*;
pub use crate::timestamp::*;

// =============================================================================
// LIBRARY VERSION AND METADATA
// =============================================================================

/// Library version
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");
