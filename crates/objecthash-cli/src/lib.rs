// crates/objecthash-cli/src/lib.rs
// ============================================================================
// Module: ObjectHash CLI Library
// Description: Shared helpers for the objecthash command-line interface.
// Purpose: Provide reusable components (i18n, audit, input) for the binary.
// Dependencies: objecthash-core, objecthash-config, serde, toml, serde_yaml
// ============================================================================

//! ## Overview
//! This library houses the CLI building blocks: the localized message
//! catalog, structured audit sinks, and input decoding from JSON, TOML, and
//! YAML into the canonical value model. The binary entry point
//! (`src/main.rs`) composes them into commands.
//!
//! Inputs are untrusted: size limits are enforced before parsing and kinds
//! without a canonical counterpart are rejected rather than coerced.

// ============================================================================
// SECTION: Modules
// ============================================================================

/// Structured audit events and sinks.
pub mod audit;
/// Internationalization helpers and message catalog.
pub mod i18n;
/// Input decoding into canonical values.
pub mod input;
