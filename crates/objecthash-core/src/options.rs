// crates/objecthash-core/src/options.rs
// ============================================================================
// Module: ObjectHash Options
// Description: Numeric policy and resource limits for hashing.
// Purpose: Make the canonical numeric rule an explicit, serializable choice.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Two numeric policies exist and produce mutually incompatible digests for
//! integral values: [`NumberPolicy::Tagged`] keeps integers under their own
//! tag, while [`NumberPolicy::FloatOnly`] normalizes every number as a float
//! so that `1` and `1.0` hash identically. Pick one per deployment and never
//! mix digests produced under different policies.

use serde::Deserialize;
use serde::Serialize;

// ============================================================================
// SECTION: Limits
// ============================================================================

/// Default maximum container nesting depth.
pub const DEFAULT_MAX_DEPTH: usize = 128;

// ============================================================================
// SECTION: Number Policy
// ============================================================================

/// Canonical numeric policy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberPolicy {
    /// Integers hash as decimal strings under tag `i`; floats under tag `f`.
    #[default]
    Tagged,
    /// Every number hashes as a normalized float under tag `f`.
    FloatOnly,
}

impl NumberPolicy {
    /// Returns a stable label for the policy.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tagged => "tagged",
            Self::FloatOnly => "float_only",
        }
    }
}

// ============================================================================
// SECTION: Hash Options
// ============================================================================

/// Options controlling a hashing run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct HashOptions {
    /// Numeric canonicalization policy.
    #[serde(default)]
    pub number_policy: NumberPolicy,
    /// Maximum container nesting depth; the root is depth zero.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
}

impl HashOptions {
    /// Returns options with the given policy and default limits.
    #[must_use]
    pub const fn with_policy(number_policy: NumberPolicy) -> Self {
        Self {
            number_policy,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl Default for HashOptions {
    fn default() -> Self {
        Self::with_policy(NumberPolicy::Tagged)
    }
}

/// Serde default for [`HashOptions::max_depth`].
const fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}
