// crates/objecthash-core/src/lib.rs
// ============================================================================
// Module: ObjectHash Core Library
// Description: Public API surface for canonical object hashing.
// Purpose: Expose the value model, hashing primitives, and redaction helpers.
// Dependencies: bigdecimal, num-traits, serde, serde_json, sha2, thiserror
// ============================================================================

//! ## Overview
//! ObjectHash computes a canonical SHA-256 digest of JSON-like values. Maps
//! hash independently of key order, numbers hash through a host-independent
//! binary normalization, and any subtree may be replaced by a redaction token
//! carrying its digest without changing the digest of the enclosing value.
//!
//! ```
//! use objecthash_core::Value;
//! use objecthash_core::canonical_hash;
//!
//! let value = Value::from(vec![Value::from("foo"), Value::from("bar")]);
//! let digest = canonical_hash(&value)?;
//! assert_eq!(
//!     digest.to_hex(),
//!     "32ae896c413cfdc79eec68be9139c86ded8b279238467c216cf2bec4d5f1e4a2"
//! );
//! # Ok::<(), objecthash_core::HashError>(())
//! ```

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod canonical;
pub mod digest;
pub mod error;
pub mod float;
pub mod options;
pub mod redaction;
pub mod tagged;
pub mod value;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use canonical::ObjectHasher;
pub use canonical::canonical_hash;
pub use canonical::hash_serializable;
pub use digest::DIGEST_LEN;
pub use digest::DigestParseError;
pub use digest::HashDigest;
pub use error::HashError;
pub use float::MAX_BINARY_EXPONENT;
pub use float::MAX_CANONICAL_FLOAT_LEN;
pub use float::float_to_decimal;
pub use float::normalize_float;
pub use options::DEFAULT_MAX_DEPTH;
pub use options::HashOptions;
pub use options::NumberPolicy;
pub use redaction::REDACTION_PREFIX;
pub use redaction::REDACTION_TOKEN_LEN;
pub use redaction::RedactionError;
pub use redaction::is_redaction_token;
pub use redaction::parse_redaction_token;
pub use redaction::redact_key;
pub use redaction::redact_pointer;
pub use redaction::redaction_token;
pub use tagged::Tag;
pub use tagged::tagged_hash;
pub use value::Value;
