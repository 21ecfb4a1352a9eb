// crates/objecthash-core/tests/proptest_canonical.rs
// ============================================================================
// Module: Canonical Hashing Property-Based Tests
// Description: Property tests for digest stability and redaction transparency.
// Purpose: Detect panics and invariant violations across wide input ranges.
// ============================================================================

//! Property-based tests for canonical hashing invariants.

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
    reason = "Test-only assertions and helpers are permitted."
)]

use objecthash_core::HashOptions;
use objecthash_core::NumberPolicy;
use objecthash_core::ObjectHasher;
use objecthash_core::Tag;
use objecthash_core::Value;
use objecthash_core::canonical_hash;
use objecthash_core::redact_key;
use objecthash_core::redact_pointer;
use objecthash_core::tagged_hash;
use proptest::prelude::*;
use serde_json::json;

fn json_value_strategy(max_depth: u32) -> impl Strategy<Value = serde_json::Value> {
    let leaf = prop_oneof![
        Just(serde_json::Value::Null),
        any::<bool>().prop_map(serde_json::Value::Bool),
        any::<i64>().prop_map(|v| serde_json::Value::Number(v.into())),
        any::<f64>()
            .prop_filter("finite", |v| v.is_finite())
            .prop_filter_map("representable", serde_json::Number::from_f64)
            .prop_map(serde_json::Value::Number),
        "[a-z0-9 ]{0,12}".prop_map(serde_json::Value::String),
    ];

    leaf.prop_recursive(max_depth, 64, 8, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0 .. 4).prop_map(serde_json::Value::Array),
            prop::collection::btree_map("[a-z]{1,4}", inner, 0 .. 4).prop_map(|map| {
                let mut object = serde_json::Map::new();
                for (key, value) in map {
                    object.insert(key, value);
                }
                serde_json::Value::Object(object)
            }),
        ]
    })
}

proptest! {
    #[test]
    fn hashing_never_panics_and_is_deterministic(json in json_value_strategy(4)) {
        let value = Value::from(json);
        let first = canonical_hash(&value).unwrap();
        let second = canonical_hash(&value.clone()).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn redacting_a_map_entry_preserves_the_root(
        secret in json_value_strategy(3),
        other in json_value_strategy(3),
        policy in prop_oneof![Just(NumberPolicy::Tagged), Just(NumberPolicy::FloatOnly)],
    ) {
        let hasher = ObjectHasher::new(HashOptions::with_policy(policy));
        let mut value = Value::from(json!({"secret": secret, "other": other}));
        let root = hasher.hash(&value).unwrap();

        redact_pointer(&mut value, "/secret", &hasher).unwrap();
        prop_assert_eq!(hasher.hash(&value).unwrap(), root);

        redact_key(&mut value, "/other").unwrap();
        prop_assert_eq!(hasher.hash(&value).unwrap(), root);
    }

    #[test]
    fn redacting_a_list_element_preserves_the_root(
        items in prop::collection::vec(json_value_strategy(3), 1 .. 5),
        pick in any::<prop::sample::Index>(),
    ) {
        let index = pick.index(items.len());
        let mut value = Value::from(serde_json::Value::Array(items));
        let root = canonical_hash(&value).unwrap();
        redact_pointer(&mut value, &format!("/{index}"), &ObjectHasher::default()).unwrap();
        prop_assert_eq!(canonical_hash(&value).unwrap(), root);
    }

    #[test]
    fn swapping_distinct_list_elements_changes_the_digest(a in any::<i64>(), b in any::<i64>()) {
        prop_assume!(a != b);
        let forward = Value::from(vec![Value::from(a), Value::from(b)]);
        let backward = Value::from(vec![Value::from(b), Value::from(a)]);
        prop_assert_ne!(canonical_hash(&forward).unwrap(), canonical_hash(&backward).unwrap());
    }

    #[test]
    fn float_only_integers_match_their_float_form(n in any::<i32>()) {
        let hasher = ObjectHasher::new(HashOptions::with_policy(NumberPolicy::FloatOnly));
        prop_assert_eq!(
            hasher.hash(&Value::from(n)).unwrap(),
            hasher.hash(&Value::from(f64::from(n))).unwrap()
        );
    }

    #[test]
    fn tagged_integers_hash_their_decimal_text(n in any::<i64>()) {
        prop_assert_eq!(
            canonical_hash(&Value::from(n)).unwrap(),
            tagged_hash(Tag::Integer, n.to_string().as_bytes())
        );
    }
}
