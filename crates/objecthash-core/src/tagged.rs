// crates/objecthash-core/src/tagged.rs
// ============================================================================
// Module: ObjectHash Tagged Hash Primitive
// Description: Type-tagged SHA-256 hashing of canonical payloads.
// Purpose: Keep values of different kinds from colliding on equal payloads.
// Dependencies: sha2
// ============================================================================

//! ## Overview
//! Every non-redacted digest is `SHA-256(tag || payload)` where `tag` is a
//! single ASCII character naming the value kind. Composite values stream
//! their child digests through [`TaggedHasher`], which is equivalent to
//! hashing the concatenated payload.

// ============================================================================
// SECTION: Imports
// ============================================================================

use sha2::Digest;
use sha2::Sha256;

use crate::digest::HashDigest;

// ============================================================================
// SECTION: Tags
// ============================================================================

/// Single-character type tags prefixed to every payload.
///
/// # Invariants
/// - Tag characters are fixed; changing one changes every digest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// Nil / null (`n`).
    Nil,
    /// Unicode string (`u`).
    Unicode,
    /// Boolean (`b`).
    Boolean,
    /// Integer (`i`).
    Integer,
    /// Float (`f`).
    Float,
    /// Ordered list (`l`).
    List,
    /// Unordered map (`d`).
    Dict,
}

impl Tag {
    /// Returns the tag character.
    #[must_use]
    pub const fn as_char(self) -> char {
        match self {
            Self::Nil => 'n',
            Self::Unicode => 'u',
            Self::Boolean => 'b',
            Self::Integer => 'i',
            Self::Float => 'f',
            Self::List => 'l',
            Self::Dict => 'd',
        }
    }

    /// Returns the UTF-8 (ASCII) byte of the tag.
    #[must_use]
    pub const fn as_byte(self) -> u8 {
        match self {
            Self::Nil => b'n',
            Self::Unicode => b'u',
            Self::Boolean => b'b',
            Self::Integer => b'i',
            Self::Float => b'f',
            Self::List => b'l',
            Self::Dict => b'd',
        }
    }
}

// ============================================================================
// SECTION: Hashing
// ============================================================================

/// Hashes `tag || payload` with SHA-256.
#[must_use]
pub fn tagged_hash(tag: Tag, payload: &[u8]) -> HashDigest {
    let mut hasher = TaggedHasher::new(tag);
    hasher.update(payload);
    hasher.finish()
}

/// Incremental tagged hasher used for composite payloads.
pub(crate) struct TaggedHasher {
    /// Underlying SHA-256 state, already primed with the tag.
    inner: Sha256,
}

impl TaggedHasher {
    /// Starts a hash primed with `tag`.
    pub(crate) fn new(tag: Tag) -> Self {
        let mut inner = Sha256::new();
        inner.update([tag.as_byte()]);
        Self {
            inner,
        }
    }

    /// Appends a payload chunk.
    pub(crate) fn update(&mut self, chunk: &[u8]) {
        self.inner.update(chunk);
    }

    /// Finalizes the digest.
    pub(crate) fn finish(self) -> HashDigest {
        let bytes: [u8; 32] = self.inner.finalize().into();
        HashDigest::from_bytes(bytes)
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::Tag;
    use super::TaggedHasher;
    use super::tagged_hash;

    #[test]
    fn tag_char_and_byte_agree() {
        for tag in [
            Tag::Nil,
            Tag::Unicode,
            Tag::Boolean,
            Tag::Integer,
            Tag::Float,
            Tag::List,
            Tag::Dict,
        ] {
            let mut buffer = [0u8; 4];
            assert_eq!(tag.as_char().encode_utf8(&mut buffer).as_bytes(), &[tag.as_byte()]);
        }
    }

    #[test]
    fn incremental_matches_concatenated_payload() {
        let mut hasher = TaggedHasher::new(Tag::List);
        hasher.update(b"abc");
        hasher.update(b"def");
        assert_eq!(hasher.finish(), tagged_hash(Tag::List, b"abcdef"));
    }

    #[test]
    fn nil_digest_matches_known_value() {
        assert_eq!(
            tagged_hash(Tag::Nil, &[]).to_hex(),
            "1b16b1df538ba12dc3f97edbb85caa7050d46c148134290feba80f8236c83db9"
        );
    }
}
