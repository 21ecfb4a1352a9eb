// crates/objecthash-core/src/canonical.rs
// ============================================================================
// Module: ObjectHash Canonicalizer
// Description: Recursive canonical hashing of values.
// Purpose: Produce order-independent, redaction-transparent digests.
// Dependencies: bigdecimal, serde, serde_json
// ============================================================================

//! ## Overview
//! [`ObjectHasher`] walks a [`Value`] and combines child digests with the
//! tagged hash primitive:
//! - lists hash the concatenation of their element digests in order;
//! - maps hash the byte-sorted concatenation of `hash(key) || hash(value)`
//!   pairs, so insertion order never matters;
//! - strings that parse as redaction tokens contribute the digest they carry
//!   instead of being hashed, wherever they appear (including map keys).
//!
//! Any error aborts the whole call; no partial digest is produced.

// ============================================================================
// SECTION: Imports
// ============================================================================

use bigdecimal::BigDecimal;
use serde::Serialize;

use crate::digest::DIGEST_LEN;
use crate::digest::HashDigest;
use crate::error::HashError;
use crate::float::normalize_f64;
use crate::float::normalize_float;
use crate::options::HashOptions;
use crate::options::NumberPolicy;
use crate::redaction::parse_redaction_token;
use crate::redaction::redaction_token;
use crate::tagged::Tag;
use crate::tagged::TaggedHasher;
use crate::tagged::tagged_hash;
use crate::value::Value;

// ============================================================================
// SECTION: Entry Points
// ============================================================================

/// Hashes a value with default options ([`NumberPolicy::Tagged`]).
///
/// # Errors
///
/// Returns [`HashError`] when the value cannot be canonicalized.
pub fn canonical_hash(value: &Value) -> Result<HashDigest, HashError> {
    ObjectHasher::default().hash(value)
}

/// Hashes any serializable value by mapping it through `serde_json`.
///
/// Numbers keep their full precision on the way through, so integers of any
/// width (including `u128`/`i128`) hash exactly.
///
/// # Errors
///
/// Returns [`HashError::Serialization`] when serde mapping fails (for example
/// non-string map keys), or any canonicalization error.
pub fn hash_serializable<T: Serialize + ?Sized>(
    value: &T,
    options: HashOptions,
) -> Result<HashDigest, HashError> {
    let json =
        serde_json::to_value(value).map_err(|err| HashError::Serialization(err.to_string()))?;
    ObjectHasher::new(options).hash(&Value::from(json))
}

// ============================================================================
// SECTION: Object Hasher
// ============================================================================

/// Canonical hasher configured with [`HashOptions`].
///
/// # Invariants
/// - Stateless between calls; safe to share across threads.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ObjectHasher {
    /// Options applied to every call.
    options: HashOptions,
}

impl ObjectHasher {
    /// Creates a hasher with explicit options.
    #[must_use]
    pub const fn new(options: HashOptions) -> Self {
        Self {
            options,
        }
    }

    /// Returns the configured options.
    #[must_use]
    pub const fn options(&self) -> HashOptions {
        self.options
    }

    /// Computes the canonical digest of `value`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the value cannot be canonicalized.
    pub fn hash(&self, value: &Value) -> Result<HashDigest, HashError> {
        self.hash_at(value, 0)
    }

    /// Computes the redaction token that stands in for `value`.
    ///
    /// # Errors
    ///
    /// Returns [`HashError`] when the value cannot be canonicalized.
    pub fn redaction_token_for(&self, value: &Value) -> Result<String, HashError> {
        Ok(redaction_token(&self.hash(value)?))
    }

    /// Hashes `value` found at nesting `depth`.
    fn hash_at(&self, value: &Value, depth: usize) -> Result<HashDigest, HashError> {
        match value {
            Value::Nil => Ok(tagged_hash(Tag::Nil, &[])),
            Value::Bool(flag) => Ok(tagged_hash(Tag::Boolean, if *flag { b"1" } else { b"0" })),
            Value::String(text) => Ok(hash_string(text)),
            Value::Integer(integer) => match self.options.number_policy {
                NumberPolicy::Tagged => {
                    Ok(tagged_hash(Tag::Integer, integer.to_string().as_bytes()))
                }
                NumberPolicy::FloatOnly => {
                    let canonical = normalize_float(&BigDecimal::from(integer.clone()))?;
                    Ok(tagged_hash(Tag::Float, canonical.as_bytes()))
                }
            },
            Value::Float(float) => {
                let canonical = normalize_f64(*float)?;
                Ok(tagged_hash(Tag::Float, canonical.as_bytes()))
            }
            Value::List(items) => {
                let child_depth = self.enter(depth)?;
                let mut hasher = TaggedHasher::new(Tag::List);
                for item in items {
                    hasher.update(self.hash_at(item, child_depth)?.as_bytes());
                }
                Ok(hasher.finish())
            }
            Value::Map(map) => {
                let child_depth = self.enter(depth)?;
                let mut pairs = Vec::with_capacity(map.len());
                for (key, item) in map {
                    let mut pair = [0u8; DIGEST_LEN * 2];
                    pair[.. DIGEST_LEN].copy_from_slice(hash_string(key).as_bytes());
                    let item_digest = self.hash_at(item, child_depth)?;
                    pair[DIGEST_LEN ..].copy_from_slice(item_digest.as_bytes());
                    pairs.push(pair);
                }
                pairs.sort_unstable();
                let mut hasher = TaggedHasher::new(Tag::Dict);
                for pair in &pairs {
                    hasher.update(pair);
                }
                Ok(hasher.finish())
            }
        }
    }

    /// Returns the depth of children of a container at `depth`.
    const fn enter(&self, depth: usize) -> Result<usize, HashError> {
        let child = depth + 1;
        if child > self.options.max_depth {
            return Err(HashError::DepthLimitExceeded {
                limit: self.options.max_depth,
            });
        }
        Ok(child)
    }
}

/// Hashes a string, honoring redaction tokens.
fn hash_string(text: &str) -> HashDigest {
    parse_redaction_token(text).unwrap_or_else(|| tagged_hash(Tag::Unicode, text.as_bytes()))
}
