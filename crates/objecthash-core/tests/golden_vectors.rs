// crates/objecthash-core/tests/golden_vectors.rs
// ============================================================================
// Module: Golden Vector Tests
// Description: Pins digests of fixed inputs to known hex values.
// Purpose: Detect any drift in tags, number encoding, or composition rules.
// ============================================================================

//! ## Overview
//! Known-answer tests. Vectors containing integers were produced under the
//! float-only numeric policy and are checked with
//! [`NumberPolicy::FloatOnly`]; every other vector holds under both policies.

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

use objecthash_core::HashOptions;
use objecthash_core::NumberPolicy;
use objecthash_core::ObjectHasher;
use objecthash_core::Value;
use serde_json::json;

// ============================================================================
// SECTION: Helpers
// ============================================================================

fn hex_with(policy: NumberPolicy, json: serde_json::Value) -> String {
    ObjectHasher::new(HashOptions::with_policy(policy))
        .hash(&Value::from(json))
        .expect("hash")
        .to_hex()
}

/// Asserts the vector under both numeric policies.
fn assert_vector(json: &serde_json::Value, expected: &str) {
    assert_eq!(hex_with(NumberPolicy::Tagged, json.clone()), expected, "tagged: {json}");
    assert_eq!(hex_with(NumberPolicy::FloatOnly, json.clone()), expected, "float_only: {json}");
}

/// Asserts the vector under the float-only policy.
fn assert_float_only_vector(json: &serde_json::Value, expected: &str) {
    assert_eq!(hex_with(NumberPolicy::FloatOnly, json.clone()), expected, "float_only: {json}");
}

/// Digest of the mixed-type fixture shared by the redaction vectors.
const MIXED: &str = "783a423b094307bcb28d005bc2f026ff44204442ef3513585e7e73b66e3c2213";

// ============================================================================
// SECTION: Scalars
// ============================================================================

#[test]
fn null_vector() {
    let expected = "1b16b1df538ba12dc3f97edbb85caa7050d46c148134290feba80f8236c83db9";
    assert_vector(&json!(null), expected);
    assert_eq!(
        ObjectHasher::default().hash(&Value::from(None::<String>)).unwrap().to_hex(),
        expected
    );
}

#[test]
fn boolean_vectors() {
    assert_vector(&json!(true), "7dc96f776c8423e57a2785489a3f9c43fb6e756876d6ad9a9cac4aa4e72ec193");
    assert_vector(
        &json!(false),
        "c02c0b965e023abee808f2b548d8d5193a8b5229be6f3121a6f16e2d41a449b3",
    );
}

#[test]
fn float_vectors() {
    assert_vector(&json!(0.0), "60101d8c9cb988411468e38909571f357daa67bff5a7b0a3f9ae295cd4aba33d");
    assert_vector(&json!(-0.1), "55ab03db6fbb5e6de473a612d7e462ca8fd2387266080980e87f021a5c7bde9f");
    assert_vector(
        &json!(1.2345),
        "844e08b1195a93563db4e5d4faa59759ba0e0397caf065f3b6bc0825499754e0",
    );
    assert_vector(
        &json!(-10.1234),
        "59b49ae24998519925833e3ff56727e5d4868aba4ecf4c53653638ebff53c366",
    );
}

#[test]
fn integer_zero_matches_float_zero_only_when_float_only() {
    let float_zero = "60101d8c9cb988411468e38909571f357daa67bff5a7b0a3f9ae295cd4aba33d";
    assert_float_only_vector(&json!(0), float_zero);
    assert_ne!(hex_with(NumberPolicy::Tagged, json!(0)), float_zero);
}

#[test]
fn unicode_vectors() {
    assert_vector(
        &json!("ԱԲաբ"),
        "2a2a4485a4e338d8df683971956b1090d2f5d33955a81ecaad1a75125f7a316c",
    );
    assert_vector(
        &json!("\u{03d3}"),
        "f72826713a01881404f34975447bd6edcb8de40b191dc57097ebf4f5417a554d",
    );
    assert_vector(
        &json!("\u{03d2}\u{0301}"),
        "42d5b13fb064849a988a86eb7650a22881c0a9ecf77057a1b07ab0dad385889c",
    );
}

// ============================================================================
// SECTION: Lists
// ============================================================================

#[test]
fn list_of_string_vectors() {
    assert_vector(&json!([]), "acac86c0e609ca906f632b0e2dacccb2b77d22b0621f20ebece1a4835b93f6f0");
    assert_vector(
        &json!(["foo"]),
        "268bc27d4974d9d576222e4cdbb8f7c6bd6791894098645a19eeca9c102d0964",
    );
    assert_vector(
        &json!(["foo", "bar"]),
        "32ae896c413cfdc79eec68be9139c86ded8b279238467c216cf2bec4d5f1e4a2",
    );
}

#[test]
fn list_of_integer_vectors() {
    assert_float_only_vector(
        &json!([123]),
        "2e72db006266ed9cdaa353aa22b9213e8a3c69c838349437c06896b1b34cee36",
    );
    assert_float_only_vector(
        &json!([1, 2, 3]),
        "925d474ac71f6e8cb35dd951d123944f7cabc5cda9a043cf38cd638cc0158db0",
    );
    assert_float_only_vector(
        &json!([123_456_789_012_345_i64]),
        "f446de5475e2f24c0a2b0cd87350927f0a2870d1bb9cbaa794e789806e4c0836",
    );
    assert_float_only_vector(
        &json!([123_456_789_012_345_i64, 678_901_234_567_890_i64]),
        "d4cca471f1c68f62fbc815b88effa7e52e79d110419a7c64c1ebb107b07f7f56",
    );
}

// ============================================================================
// SECTION: Maps
// ============================================================================

#[test]
fn map_vectors() {
    assert_vector(&json!({}), "18ac3e7343f016890c510e93f935261169d9e3f565436429830faf0934f4f8e4");
    assert_vector(
        &json!({"foo": "bar"}),
        "7ef5237c3027d6c58100afadf37796b3d351025cf28038280147d42fdc53b960",
    );
    assert_vector(
        &json!({"foo": ["bar", "baz"], "qux": ["norf"]}),
        "f1a9389f27558538a064f3cc250f8686a0cebb85f1cab7f4d4dcc416ceda3c92",
    );
}

#[test]
fn map_order_independence_vector() {
    let expected = "ddd65f1f7568269a30df7cafc26044537dc2f02a1a0d830da61762fc3e687057";
    let forward: Value =
        [("k1", Value::from("v1")), ("k2", Value::from("v2")), ("k3", Value::from("v3"))]
            .into_iter()
            .collect();
    let shuffled: Value =
        [("k2", Value::from("v2")), ("k1", Value::from("v1")), ("k3", Value::from("v3"))]
            .into_iter()
            .collect();
    let hasher = ObjectHasher::default();
    assert_eq!(hasher.hash(&forward).unwrap().to_hex(), expected);
    assert_eq!(hasher.hash(&shuffled).unwrap().to_hex(), expected);
}

// ============================================================================
// SECTION: Mixed and Redacted
// ============================================================================

#[test]
fn mixed_type_vectors() {
    assert_vector(
        &json!(["foo", {"bar": ["baz", null, 1.0, 1.5, 0.0001, 1000.0, 2.0, -23.1234, 2.0]}]),
        MIXED,
    );
    assert_float_only_vector(
        &json!(["foo", {"bar": ["baz", null, 1, 1.5, 0.0001, 1000, 2, -23.1234, 2]}]),
        MIXED,
    );
    assert_float_only_vector(
        &json!(["foo", {"b4r": ["baz", null, 1, 1.5, 0.0001, 1000, 2, -23.1234, 2]}]),
        "7e01f8b45da35386e4f9531ff1678147a215b8d2b1d047e690fd9ade6151e431",
    );
}

#[test]
fn redacted_vectors() {
    assert_vector(
        &json!([
            "foo",
            "**REDACTED**96e2aab962831956c80b542f056454be411f870055d37805feb3007c855bd823"
        ]),
        MIXED,
    );
    assert_vector(
        &json!(["foo", {"bar": [
            "**REDACTED**82f70430fa7b78951b3c4634d228756a165634df977aa1fada051d6828e78f30",
            null,
            1.0,
            1.5,
            "**REDACTED**1195afc7f0b70bb9d7960c3615668e072a1cbfbbb001f84871fd2e222a87be1d",
            1000.0,
            2.0,
            -23.1234,
            2.0
        ]}]),
        MIXED,
    );
    assert_vector(
        &json!(["foo", {
            "**REDACTED**e303ce0bd0f4c1fdfe4cc1e837d7391241e2e047df10fa6101733dc120675dfe":
                ["baz", null, 1.0, 1.5, 0.0001, 1000.0, 2.0, -23.1234, 2.0]
        }]),
        MIXED,
    );
}
