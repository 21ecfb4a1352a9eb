// crates/objecthash-core/src/redaction.rs
// ============================================================================
// Module: ObjectHash Redaction
// Description: Redaction token codec and in-place subtree redaction.
// Purpose: Hide content while keeping the enclosing digest verifiable.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! A redaction token is `**REDACTED**` followed by the 64 hex characters of
//! a digest. The canonicalizer substitutes the carried digest for any string
//! that parses as a token, so replacing a subtree (or a map key) by the token
//! of its own digest leaves every enclosing digest unchanged.
//!
//! Parsing is syntactic: a string that merely looks like a token is treated
//! as one. Producers of untrusted strings that must hash literally have to
//! reject or escape token-shaped input themselves.

// ============================================================================
// SECTION: Imports
// ============================================================================

use thiserror::Error;

use crate::canonical::ObjectHasher;
use crate::digest::DIGEST_HEX_LEN;
use crate::digest::HashDigest;
use crate::error::HashError;
use crate::tagged::Tag;
use crate::tagged::tagged_hash;
use crate::value::Value;
use crate::value::pointer_tokens;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Literal marker that starts every redaction token.
pub const REDACTION_PREFIX: &str = "**REDACTED**";

/// Total length of a redaction token in bytes.
pub const REDACTION_TOKEN_LEN: usize = REDACTION_PREFIX.len() + DIGEST_HEX_LEN;

// ============================================================================
// SECTION: Token Codec
// ============================================================================

/// Builds the redaction token carrying `digest`.
#[must_use]
pub fn redaction_token(digest: &HashDigest) -> String {
    format!("{REDACTION_PREFIX}{}", digest.to_hex())
}

/// Parses a redaction token, returning the digest it carries.
///
/// The prefix and the hex digits are matched case-insensitively.
#[must_use]
pub fn parse_redaction_token(text: &str) -> Option<HashDigest> {
    if text.len() != REDACTION_TOKEN_LEN {
        return None;
    }
    let (prefix, hex) = text.split_at_checked(REDACTION_PREFIX.len())?;
    if !prefix.eq_ignore_ascii_case(REDACTION_PREFIX) {
        return None;
    }
    HashDigest::from_hex(hex).ok()
}

/// Returns true when `text` parses as a redaction token.
#[must_use]
pub fn is_redaction_token(text: &str) -> bool {
    parse_redaction_token(text).is_some()
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Errors raised while redacting part of a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RedactionError {
    /// Pointer syntax is invalid (must be empty or start with `/`).
    #[error("invalid json pointer: {pointer}")]
    InvalidPointer {
        /// Offending pointer.
        pointer: String,
    },
    /// Pointer does not resolve to a value.
    #[error("json pointer not found: {pointer}")]
    PointerNotFound {
        /// Offending pointer.
        pointer: String,
    },
    /// Key redaction targeted a value that is not a map.
    #[error("json pointer parent is not a map: {pointer}")]
    NotAMap {
        /// Offending pointer.
        pointer: String,
    },
    /// The redacted key collides with a key already in the map.
    #[error("redacted key collides with an existing key: {pointer}")]
    KeyCollision {
        /// Offending pointer.
        pointer: String,
    },
    /// Hashing the redacted subtree failed.
    #[error(transparent)]
    Hash(#[from] HashError),
}

// ============================================================================
// SECTION: Redaction Helpers
// ============================================================================

/// Replaces the subtree at `pointer` with its redaction token.
///
/// Returns the digest of the redacted subtree. The empty pointer redacts the
/// whole value.
///
/// # Errors
///
/// Returns [`RedactionError`] when the pointer is invalid or unresolved, or
/// when the subtree cannot be hashed.
pub fn redact_pointer(
    root: &mut Value,
    pointer: &str,
    hasher: &ObjectHasher,
) -> Result<HashDigest, RedactionError> {
    if pointer_tokens(pointer).is_none() {
        return Err(RedactionError::InvalidPointer {
            pointer: pointer.to_string(),
        });
    }
    let target = root.pointer_mut(pointer).ok_or_else(|| RedactionError::PointerNotFound {
        pointer: pointer.to_string(),
    })?;
    let digest = hasher.hash(target)?;
    *target = Value::String(redaction_token(&digest));
    Ok(digest)
}

/// Replaces the map key named by the last segment of `pointer` with its
/// redaction token, keeping the associated value.
///
/// Returns the digest of the key string.
///
/// # Errors
///
/// Returns [`RedactionError`] when the pointer is invalid, the parent is not a
/// map, the key is missing, or the token collides with an existing key.
pub fn redact_key(root: &mut Value, pointer: &str) -> Result<HashDigest, RedactionError> {
    let mut tokens = pointer_tokens(pointer).ok_or_else(|| RedactionError::InvalidPointer {
        pointer: pointer.to_string(),
    })?;
    let key = tokens.pop().ok_or_else(|| RedactionError::InvalidPointer {
        pointer: pointer.to_string(),
    })?;
    let parent_pointer = parent_of(pointer);
    let parent = root.pointer_mut(parent_pointer).ok_or_else(|| {
        RedactionError::PointerNotFound {
            pointer: pointer.to_string(),
        }
    })?;
    let Value::Map(map) = parent else {
        return Err(RedactionError::NotAMap {
            pointer: pointer.to_string(),
        });
    };
    let digest = parse_redaction_token(&key)
        .unwrap_or_else(|| tagged_hash(Tag::Unicode, key.as_bytes()));
    let token = redaction_token(&digest);
    if token == key {
        return if map.contains_key(&key) {
            Ok(digest)
        } else {
            Err(RedactionError::PointerNotFound {
                pointer: pointer.to_string(),
            })
        };
    }
    if map.contains_key(&token) {
        return Err(RedactionError::KeyCollision {
            pointer: pointer.to_string(),
        });
    }
    let value = map.remove(&key).ok_or_else(|| RedactionError::PointerNotFound {
        pointer: pointer.to_string(),
    })?;
    map.insert(token, value);
    Ok(digest)
}

/// Returns the pointer to the parent of the value addressed by `pointer`.
fn parent_of(pointer: &str) -> &str {
    pointer.rfind('/').map_or("", |index| &pointer[.. index])
}

// ============================================================================
// SECTION: Tests
// ============================================================================
