// crates/objecthash-core/src/digest.rs
// ============================================================================
// Module: ObjectHash Digest
// Description: Fixed-size SHA-256 digest type and hex codec.
// Purpose: Give every hashed subtree a stable, comparable identity.
// Dependencies: serde, thiserror
// ============================================================================

//! ## Overview
//! [`HashDigest`] wraps the 32-byte output of the hash primitive. It renders
//! as lowercase hex and parses hex of either case, which is the encoding used
//! inside redaction tokens.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;
use serde::Serializer;
use serde::de::Error as _;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Length of a digest in bytes.
pub const DIGEST_LEN: usize = 32;

/// Length of a hex-encoded digest in characters.
pub(crate) const DIGEST_HEX_LEN: usize = DIGEST_LEN * 2;

// ============================================================================
// SECTION: Hash Digest
// ============================================================================

/// SHA-256 digest of a canonicalized value.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HashDigest([u8; DIGEST_LEN]);

impl HashDigest {
    /// Wraps raw digest bytes.
    #[must_use]
    pub const fn from_bytes(bytes: [u8; DIGEST_LEN]) -> Self {
        Self(bytes)
    }

    /// Returns the raw digest bytes.
    #[must_use]
    pub const fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }

    /// Returns the digest as lowercase hex.
    #[must_use]
    pub fn to_hex(&self) -> String {
        hex_encode(&self.0)
    }

    /// Parses a 64-character hex digest (either case).
    ///
    /// # Errors
    ///
    /// Returns [`DigestParseError`] when the length or characters are invalid.
    pub fn from_hex(text: &str) -> Result<Self, DigestParseError> {
        let raw = text.as_bytes();
        if raw.len() != DIGEST_HEX_LEN {
            return Err(DigestParseError::Length {
                actual: raw.len(),
            });
        }
        let mut bytes = [0u8; DIGEST_LEN];
        for (index, pair) in raw.chunks_exact(2).enumerate() {
            let high = hex_value(pair[0]).ok_or(DigestParseError::Character {
                index: index * 2,
            })?;
            let low = hex_value(pair[1]).ok_or(DigestParseError::Character {
                index: index * 2 + 1,
            })?;
            bytes[index] = (high << 4) | low;
        }
        Ok(Self(bytes))
    }
}

impl fmt::Display for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl fmt::Debug for HashDigest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HashDigest({})", self.to_hex())
    }
}

impl FromStr for HashDigest {
    type Err = DigestParseError;

    fn from_str(text: &str) -> Result<Self, Self::Err> {
        Self::from_hex(text)
    }
}

impl AsRef<[u8]> for HashDigest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl Serialize for HashDigest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_hex())
    }
}

impl<'de> Deserialize<'de> for HashDigest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let text = String::deserialize(deserializer)?;
        Self::from_hex(&text).map_err(D::Error::custom)
    }
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised when parsing a hex digest.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DigestParseError {
    /// Input was not exactly 64 characters long.
    #[error("digest must be 64 hex characters, got {actual}")]
    Length {
        /// Observed input length in bytes.
        actual: usize,
    },
    /// Input contained a non-hex character.
    #[error("invalid hex character at offset {index}")]
    Character {
        /// Byte offset of the offending character.
        index: usize,
    },
}

// ============================================================================
// SECTION: Hex Encoding
// ============================================================================

/// Encodes bytes as a lowercase hex string.
fn hex_encode(bytes: &[u8]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(HEX[(byte >> 4) as usize] as char);
        out.push(HEX[(byte & 0x0f) as usize] as char);
    }
    out
}

/// Decodes a single hex character of either case.
const fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0' ..= b'9' => Some(byte - b'0'),
        b'a' ..= b'f' => Some(byte - b'a' + 10),
        b'A' ..= b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
