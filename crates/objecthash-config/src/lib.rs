// crates/objecthash-config/src/lib.rs
// ============================================================================
// Module: ObjectHash Config Library
// Description: Canonical config model and validation for objecthash.toml.
// Purpose: Single source of truth for hashing, input, and audit settings.
// Dependencies: objecthash-core, serde, toml
// ============================================================================

//! ## Overview
//! `objecthash-config` defines the configuration model read by the
//! `objecthash` command line. Loading is strict and fail-closed: oversized,
//! non-UTF-8, unknown, or out-of-range settings are rejected before any
//! hashing happens.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod config;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use config::*;
