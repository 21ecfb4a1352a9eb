// crates/objecthash-core/src/error.rs
// ============================================================================
// Module: ObjectHash Errors
// Description: Fatal errors raised while canonicalizing a value.
// Purpose: Abort hashing with a precise reason and no partial digest.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Every hashing error is fatal for the top-level call that raised it. The
//! variants name the offending input so callers can report it directly.

use thiserror::Error;

/// Errors raised when computing canonical hashes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum HashError {
    /// The input contains a kind of value with no canonical form.
    #[error("unknown type: {kind} ({value})")]
    UnsupportedType {
        /// Kind label of the offending value.
        kind: String,
        /// Rendering of the offending value.
        value: String,
    },
    /// A number has no finite canonical float expansion.
    #[error("invalid number: {value}")]
    InvalidNumber {
        /// Rendering of the offending number.
        value: String,
    },
    /// The input nests deeper than the configured limit.
    #[error("value nesting exceeds depth limit of {limit}")]
    DepthLimitExceeded {
        /// Configured depth limit.
        limit: usize,
    },
    /// A serializable value could not be mapped onto the value model.
    #[error("failed to serialize value: {0}")]
    Serialization(String),
}

impl HashError {
    /// Builds an [`HashError::UnsupportedType`] from a kind label and value.
    #[must_use]
    pub fn unsupported(kind: impl Into<String>, value: impl Into<String>) -> Self {
        Self::UnsupportedType {
            kind: kind.into(),
            value: value.into(),
        }
    }

    /// Builds an [`HashError::InvalidNumber`] from a number rendering.
    #[must_use]
    pub fn invalid_number(value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            value: value.into(),
        }
    }

    /// Returns a stable label for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::UnsupportedType {
                ..
            } => "unsupported_type",
            Self::InvalidNumber {
                ..
            } => "invalid_number",
            Self::DepthLimitExceeded {
                ..
            } => "depth_limit_exceeded",
            Self::Serialization(_) => "serialization",
        }
    }
}
