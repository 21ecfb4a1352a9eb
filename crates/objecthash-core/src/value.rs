// crates/objecthash-core/src/value.rs
// ============================================================================
// Module: ObjectHash Value Model
// Description: Closed sum type over the seven hashable value kinds.
// Purpose: Make canonicalization an exhaustive match instead of type sniffing.
// Dependencies: bigdecimal, serde, serde_json
// ============================================================================

//! ## Overview
//! [`Value`] is the only input the canonicalizer accepts. Foreign
//! representations convert into it up front, so every kind the hasher can see
//! is known at compile time. Maps are keyed by `String` and do not remember
//! insertion order; map digests never depend on it anyway.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;

use bigdecimal::num_bigint::BigInt;
use serde::Serialize;
use serde::Serializer;
use serde::ser::Error as _;
use serde::ser::SerializeMap;
use serde::ser::SerializeSeq;

// ============================================================================
// SECTION: Value
// ============================================================================

/// A JSON-like value that can be canonically hashed.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Value {
    /// Absence of a value (`null`, `None`, undefined).
    #[default]
    Nil,
    /// Boolean.
    Bool(bool),
    /// Unicode string; may be a redaction token.
    String(String),
    /// Arbitrary-precision integer.
    Integer(BigInt),
    /// Host floating-point number.
    Float(f64),
    /// Ordered list.
    List(Vec<Self>),
    /// Unordered map with unique string keys.
    Map(BTreeMap<String, Self>),
}

impl Value {
    /// Returns a stable lowercase label for the value kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Nil => "nil",
            Self::Bool(_) => "boolean",
            Self::String(_) => "string",
            Self::Integer(_) => "integer",
            Self::Float(_) => "float",
            Self::List(_) => "list",
            Self::Map(_) => "map",
        }
    }

    /// Returns true for [`Value::Nil`].
    #[must_use]
    pub const fn is_nil(&self) -> bool {
        matches!(self, Self::Nil)
    }

    /// Returns the string contents when this is a string.
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }

    /// Returns the map when this is a map.
    #[must_use]
    pub const fn as_map(&self) -> Option<&BTreeMap<String, Self>> {
        match self {
            Self::Map(map) => Some(map),
            _ => None,
        }
    }

    /// Looks up a value by RFC 6901 JSON pointer.
    #[must_use]
    pub fn pointer(&self, pointer: &str) -> Option<&Self> {
        let tokens = pointer_tokens(pointer)?;
        let mut target = self;
        for token in tokens {
            target = match target {
                Self::Map(map) => map.get(&token)?,
                Self::List(list) => list.get(parse_index(&token)?)?,
                _ => return None,
            };
        }
        Some(target)
    }

    /// Looks up a mutable value by RFC 6901 JSON pointer.
    #[must_use]
    pub fn pointer_mut(&mut self, pointer: &str) -> Option<&mut Self> {
        let tokens = pointer_tokens(pointer)?;
        let mut target = self;
        for token in tokens {
            target = match target {
                Self::Map(map) => map.get_mut(&token)?,
                Self::List(list) => list.get_mut(parse_index(&token)?)?,
                _ => return None,
            };
        }
        Some(target)
    }
}

// ============================================================================
// SECTION: JSON Pointer Helpers
// ============================================================================

/// Splits a JSON pointer into unescaped reference tokens.
///
/// Returns `None` for pointers that are neither empty nor start with `/`.
pub(crate) fn pointer_tokens(pointer: &str) -> Option<Vec<String>> {
    if pointer.is_empty() {
        return Some(Vec::new());
    }
    let rest = pointer.strip_prefix('/')?;
    Some(rest.split('/').map(|token| token.replace("~1", "/").replace("~0", "~")).collect())
}

/// Parses a list index token; leading zeros and signs are rejected.
fn parse_index(token: &str) -> Option<usize> {
    if token.is_empty() || (token.len() > 1 && token.starts_with('0')) {
        return None;
    }
    if !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    token.parse().ok()
}

// ============================================================================
// SECTION: Conversions
// ============================================================================

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Self::String(value)
    }
}

/// Implements `From<$t>` for integer primitives.
macro_rules! impl_from_integer {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Self::Integer(BigInt::from(value))
                }
            }
        )*
    };
}

impl_from_integer!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl From<BigInt> for Value {
    fn from(value: BigInt) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Self::Float(f64::from(value))
    }
}

impl From<Vec<Self>> for Value {
    fn from(value: Vec<Self>) -> Self {
        Self::List(value)
    }
}

impl From<BTreeMap<String, Self>> for Value {
    fn from(value: BTreeMap<String, Self>) -> Self {
        Self::Map(value)
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Nil, Into::into)
    }
}

impl FromIterator<Self> for Value {
    fn from_iter<I: IntoIterator<Item = Self>>(iter: I) -> Self {
        Self::List(iter.into_iter().collect())
    }
}

impl<K: Into<String>> FromIterator<(K, Self)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, Self)>>(iter: I) -> Self {
        Self::Map(iter.into_iter().map(|(key, value)| (key.into(), value)).collect())
    }
}

impl From<&serde_json::Value> for Value {
    fn from(value: &serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(flag) => Self::Bool(*flag),
            serde_json::Value::Number(number) => number_to_value(number),
            serde_json::Value::String(text) => Self::String(text.clone()),
            serde_json::Value::Array(items) => Self::List(items.iter().map(Self::from).collect()),
            serde_json::Value::Object(map) => Self::Map(
                map.iter().map(|(key, value)| (key.clone(), Self::from(value))).collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for Value {
    fn from(value: serde_json::Value) -> Self {
        match value {
            serde_json::Value::Null => Self::Nil,
            serde_json::Value::Bool(flag) => Self::Bool(flag),
            serde_json::Value::Number(number) => number_to_value(&number),
            serde_json::Value::String(text) => Self::String(text),
            serde_json::Value::Array(items) => {
                Self::List(items.into_iter().map(Self::from).collect())
            }
            serde_json::Value::Object(map) => {
                Self::Map(map.into_iter().map(|(key, value)| (key, Self::from(value))).collect())
            }
        }
    }
}

/// Maps a JSON number onto an integer when it was written without a fraction
/// or exponent. Integers keep every digit; other numbers round to `f64`.
fn number_to_value(number: &serde_json::Number) -> Value {
    let text = number.as_str();
    if !text.contains(['.', 'e', 'E'])
        && let Ok(integer) = text.parse::<BigInt>()
    {
        return Value::Integer(integer);
    }
    Value::Float(text.parse().unwrap_or(f64::NAN))
}

// ============================================================================
// SECTION: Serialization
// ============================================================================

impl Serialize for Value {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Nil => serializer.serialize_unit(),
            Self::Bool(flag) => serializer.serialize_bool(*flag),
            Self::String(text) => serializer.serialize_str(text),
            Self::Integer(value) => {
                if let Ok(small) = i64::try_from(value) {
                    serializer.serialize_i64(small)
                } else if let Ok(small) = u64::try_from(value) {
                    serializer.serialize_u64(small)
                } else if let Ok(wide) = i128::try_from(value) {
                    serializer.serialize_i128(wide)
                } else if let Ok(wide) = u128::try_from(value) {
                    serializer.serialize_u128(wide)
                } else {
                    let number = value
                        .to_string()
                        .parse::<serde_json::Number>()
                        .map_err(|err| S::Error::custom(format!("integer {value}: {err}")))?;
                    number.serialize(serializer)
                }
            }
            Self::Float(value) => serializer.serialize_f64(*value),
            Self::List(items) => {
                let mut seq = serializer.serialize_seq(Some(items.len()))?;
                for item in items {
                    seq.serialize_element(item)?;
                }
                seq.end()
            }
            Self::Map(map) => {
                let mut out = serializer.serialize_map(Some(map.len()))?;
                for (key, value) in map {
                    out.serialize_entry(key, value)?;
                }
                out.end()
            }
        }
    }
}

// ============================================================================
// SECTION: Tests
// ============================================================================
