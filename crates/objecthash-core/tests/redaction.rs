// crates/objecthash-core/tests/redaction.rs
// ============================================================================
// Module: Redaction Tests
// Description: Verifies token substitution and in-place redaction helpers.
// Purpose: Ensure redaction never changes the digest of the enclosing value.
// ============================================================================

//! ## Overview
//! Redacting a subtree, a map value, or a map key must leave the root digest
//! untouched. Token-shaped strings are always treated as redactions, which is
//! a known collision risk exercised here explicitly.

#![allow(
    clippy::panic,
    clippy::print_stdout,
    clippy::print_stderr,
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::use_debug,
    clippy::dbg_macro,
    clippy::panic_in_result_fn,
    clippy::unwrap_in_result,
    reason = "Test-only output and panic-based assertions are permitted."
)]

// ============================================================================
// SECTION: Imports
// ============================================================================

use objecthash_core::HashError;
use objecthash_core::HashOptions;
use objecthash_core::NumberPolicy;
use objecthash_core::ObjectHasher;
use objecthash_core::REDACTION_PREFIX;
use objecthash_core::RedactionError;
use objecthash_core::Tag;
use objecthash_core::Value;
use objecthash_core::canonical_hash;
use objecthash_core::is_redaction_token;
use objecthash_core::redact_key;
use objecthash_core::redact_pointer;
use objecthash_core::redaction_token;
use objecthash_core::tagged_hash;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn document() -> Value {
    Value::from(json!({
        "user": {"name": "ada", "email": "ada@example.com", "roles": ["admin", "dev"]},
        "events": [{"kind": "login", "at": 1.5}, {"kind": "logout", "at": 2.25}],
        "flag": true
    }))
}

// ============================================================================
// SECTION: Token Substitution
// ============================================================================

#[test]
fn standalone_token_hashes_to_carried_digest() {
    let digest = canonical_hash(&Value::from("secret")).unwrap();
    let token = redaction_token(&digest);
    assert!(token.starts_with(REDACTION_PREFIX));
    assert_eq!(canonical_hash(&Value::from(token)).unwrap(), digest);
}

#[test]
fn token_replacing_a_map_value_preserves_root_digest() {
    let original = document();
    let root = canonical_hash(&original).unwrap();
    let user = original.pointer("/user").unwrap();
    let token = ObjectHasher::default().redaction_token_for(user).unwrap();

    let mut redacted = original.clone();
    *redacted.pointer_mut("/user").unwrap() = Value::from(token);
    assert_eq!(canonical_hash(&redacted).unwrap(), root);
}

#[test]
fn token_replacing_a_map_key_preserves_root_digest() {
    let original = Value::from(json!({"bar": ["baz"], "qux": 1}));
    let root = canonical_hash(&original).unwrap();
    let key_token = redaction_token(&tagged_hash(Tag::Unicode, b"bar"));
    let redacted = Value::from(json!({ key_token: ["baz"], "qux": 1 }));
    assert_eq!(canonical_hash(&redacted).unwrap(), root);
}

#[test]
fn upper_case_tokens_are_honored() {
    let digest = canonical_hash(&Value::from(vec![Value::from(1)])).unwrap();
    let token = redaction_token(&digest).to_ascii_uppercase();
    assert!(is_redaction_token(&token));
    assert_eq!(canonical_hash(&Value::from(token)).unwrap(), digest);
}

#[test]
fn token_shaped_strings_are_always_redactions() {
    let literal = format!("{REDACTION_PREFIX}{}", "00".repeat(32));
    let digest = canonical_hash(&Value::from(literal.clone())).unwrap();
    assert_eq!(digest.as_bytes(), &[0u8; 32]);
    assert_ne!(digest, tagged_hash(Tag::Unicode, literal.as_bytes()));
}

#[test]
fn near_miss_tokens_hash_as_plain_strings() {
    let short = format!("{REDACTION_PREFIX}{}", "a".repeat(63));
    assert_eq!(
        canonical_hash(&Value::from(short.clone())).unwrap(),
        tagged_hash(Tag::Unicode, short.as_bytes())
    );
}

// ============================================================================
// SECTION: Redaction Helpers
// ============================================================================

#[test]
fn redact_pointer_replaces_nested_subtrees() {
    let mut value = document();
    let root = canonical_hash(&value).unwrap();
    let hasher = ObjectHasher::default();

    let email = redact_pointer(&mut value, "/user/email", &hasher).unwrap();
    let event = redact_pointer(&mut value, "/events/1", &hasher).unwrap();

    assert_eq!(email, canonical_hash(&Value::from("ada@example.com")).unwrap());
    assert_eq!(value.pointer("/events/1"), Some(&Value::from(redaction_token(&event))));
    assert_eq!(canonical_hash(&value).unwrap(), root);
}

#[test]
fn redact_pointer_on_root_replaces_everything() {
    let mut value = document();
    let root = canonical_hash(&value).unwrap();
    let digest = redact_pointer(&mut value, "", &ObjectHasher::default()).unwrap();
    assert_eq!(digest, root);
    assert_eq!(value, Value::from(redaction_token(&root)));
}

#[test]
fn redacting_twice_is_stable() {
    let mut value = document();
    let root = canonical_hash(&value).unwrap();
    let hasher = ObjectHasher::default();
    let first = redact_pointer(&mut value, "/user", &hasher).unwrap();
    let second = redact_pointer(&mut value, "/user", &hasher).unwrap();
    assert_eq!(first, second);
    assert_eq!(canonical_hash(&value).unwrap(), root);
}

#[test]
fn redact_key_keeps_value_and_digest() {
    let mut value = document();
    let root = canonical_hash(&value).unwrap();
    let digest = redact_key(&mut value, "/user/email").unwrap();
    let token = redaction_token(&digest);

    let user = value.pointer("/user").and_then(Value::as_map).unwrap();
    assert!(!user.contains_key("email"));
    assert_eq!(user.get(&token), Some(&Value::from("ada@example.com")));
    assert_eq!(canonical_hash(&value).unwrap(), root);
}

#[test]
fn redact_pointer_respects_hasher_policy() {
    let float_only = ObjectHasher::new(HashOptions::with_policy(NumberPolicy::FloatOnly));
    let mut value = Value::from(json!({"n": [1, 2]}));
    let root = float_only.hash(&value).unwrap();
    redact_pointer(&mut value, "/n", &float_only).unwrap();
    assert_eq!(float_only.hash(&value).unwrap(), root);
    let tagged_root = canonical_hash(&Value::from(json!({"n": [1, 2]}))).unwrap();
    assert_ne!(canonical_hash(&value).unwrap(), tagged_root);
}

#[test]
fn redaction_errors_are_reported() {
    let mut value = document();
    let hasher = ObjectHasher::default();
    assert!(matches!(
        redact_pointer(&mut value, "user", &hasher),
        Err(RedactionError::InvalidPointer { .. })
    ));
    assert!(matches!(
        redact_pointer(&mut value, "/missing", &hasher),
        Err(RedactionError::PointerNotFound { .. })
    ));
    assert!(matches!(redact_key(&mut value, ""), Err(RedactionError::InvalidPointer { .. })));
    assert!(matches!(
        redact_key(&mut value, "/events/0"),
        Err(RedactionError::NotAMap { .. })
    ));
    assert!(matches!(
        redact_key(&mut value, "/user/phone"),
        Err(RedactionError::PointerNotFound { .. })
    ));
}

#[test]
fn redact_key_detects_collisions() {
    let token = redaction_token(&tagged_hash(Tag::Unicode, b"a"));
    let mut value = Value::from(json!({"a": 1, token: 2}));
    assert!(matches!(redact_key(&mut value, "/a"), Err(RedactionError::KeyCollision { .. })));
}

#[test]
fn redaction_surfaces_hash_errors() {
    let mut value = Value::from(vec![Value::from(f64::NAN)]);
    let err = redact_pointer(&mut value, "/0", &ObjectHasher::default()).unwrap_err();
    assert!(matches!(err, RedactionError::Hash(HashError::InvalidNumber { .. })));
}
