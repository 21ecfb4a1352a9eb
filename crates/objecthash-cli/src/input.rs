// crates/objecthash-cli/src/input.rs
// ============================================================================
// Module: CLI Input Decoding
// Description: Decodes JSON, TOML, and YAML documents into canonical values.
// Purpose: Map every supported input kind onto `Value` and reject the rest.
// Dependencies: objecthash-core, serde, serde_json, toml, serde_yaml, thiserror
// ============================================================================

//! ## Overview
//! Input documents are parsed with the format's native parser and then
//! converted to [`Value`]. Kinds that have no canonical counterpart are
//! rejected with [`HashError::UnsupportedType`] rather than coerced:
//! TOML datetimes, YAML tagged values, and YAML map keys that are not
//! strings.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use objecthash_core::HashError;
use objecthash_core::Value;
use serde::Deserialize;
use serde::Deserializer;
use serde::de;
use serde::de::EnumAccess;
use serde::de::IgnoredAny;
use serde::de::MapAccess;
use serde::de::SeqAccess;
use serde::de::VariantAccess;
use serde::de::Visitor;
use thiserror::Error;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Supported input document formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputFormat {
    /// JSON (RFC 8259).
    Json,
    /// TOML document (root is always a table).
    Toml,
    /// YAML single document.
    Yaml,
}

impl InputFormat {
    /// Returns the canonical format label.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Json => "json",
            Self::Toml => "toml",
            Self::Yaml => "yaml",
        }
    }

    /// Detects the format from a file extension.
    #[must_use]
    pub fn detect(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?.to_ascii_lowercase();
        match extension.as_str() {
            "json" => Some(Self::Json),
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

/// Errors raised while decoding an input document.
#[derive(Debug, Error)]
pub enum InputError {
    /// The document is not valid UTF-8 (TOML only).
    #[error("input must be utf-8")]
    Utf8,
    /// The format parser rejected the document.
    #[error("{format} parse error: {message}")]
    Parse {
        /// Format label.
        format: &'static str,
        /// Parser message.
        message: String,
    },
    /// The document contains a kind with no canonical counterpart.
    #[error(transparent)]
    Unsupported(#[from] HashError),
}

impl InputError {
    /// Returns a stable label for the error kind.
    #[must_use]
    pub const fn kind(&self) -> &'static str {
        match self {
            Self::Utf8 | Self::Parse {
                ..
            } => "input_parse",
            Self::Unsupported(err) => err.kind(),
        }
    }
}

// ============================================================================
// SECTION: Decoding
// ============================================================================

/// Decodes `bytes` in the given format into a canonical value.
///
/// # Errors
///
/// Returns [`InputError`] when parsing fails or an unsupported kind appears.
pub fn decode(bytes: &[u8], format: InputFormat) -> Result<Value, InputError> {
    match format {
        InputFormat::Json => decode_json(bytes),
        InputFormat::Toml => decode_toml(bytes),
        InputFormat::Yaml => decode_yaml(bytes),
    }
}

/// Decodes a JSON document.
fn decode_json(bytes: &[u8]) -> Result<Value, InputError> {
    let json: serde_json::Value =
        serde_json::from_slice(bytes).map_err(|err| InputError::Parse {
            format: InputFormat::Json.as_str(),
            message: err.to_string(),
        })?;
    Ok(Value::from(json))
}

/// Decodes a TOML document.
fn decode_toml(bytes: &[u8]) -> Result<Value, InputError> {
    let text = std::str::from_utf8(bytes).map_err(|_| InputError::Utf8)?;
    let table: toml::Table = toml::from_str(text).map_err(|err| InputError::Parse {
        format: InputFormat::Toml.as_str(),
        message: err.to_string(),
    })?;
    toml_table(table)
}

/// Converts a TOML table into a map value.
fn toml_table(table: toml::Table) -> Result<Value, InputError> {
    let mut map = BTreeMap::new();
    for (key, item) in table {
        map.insert(key, toml_value(item)?);
    }
    Ok(Value::Map(map))
}

/// Converts a single TOML value.
fn toml_value(value: toml::Value) -> Result<Value, InputError> {
    Ok(match value {
        toml::Value::String(text) => Value::String(text),
        toml::Value::Integer(number) => Value::from(number),
        toml::Value::Float(number) => Value::Float(number),
        toml::Value::Boolean(flag) => Value::Bool(flag),
        toml::Value::Datetime(datetime) => {
            return Err(HashError::unsupported("datetime", datetime.to_string()).into());
        }
        toml::Value::Array(items) => {
            Value::List(items.into_iter().map(toml_value).collect::<Result<_, _>>()?)
        }
        toml::Value::Table(table) => toml_table(table)?,
    })
}

/// Decodes a YAML document.
fn decode_yaml(bytes: &[u8]) -> Result<Value, InputError> {
    let YamlNode(node) = serde_yaml::from_slice(bytes).map_err(|err| InputError::Parse {
        format: InputFormat::Yaml.as_str(),
        message: err.to_string(),
    })?;
    Ok(node?)
}

/// A YAML node decoded straight from the parser.
///
/// Kinds without a canonical counterpart are carried as an error instead of
/// failing the parse, so they surface as [`HashError::UnsupportedType`].
struct YamlNode(Result<Value, HashError>);

impl<'de> Deserialize<'de> for YamlNode {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(YamlVisitor)
    }
}

/// Visitor building [`YamlNode`] values.
struct YamlVisitor;

impl YamlNode {
    /// Wraps a value that decoded cleanly.
    const fn accepted(value: Value) -> Self {
        Self(Ok(value))
    }
}

impl<'de> Visitor<'de> for YamlVisitor {
    type Value = YamlNode;

    fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str("a YAML value")
    }

    fn visit_unit<E: de::Error>(self) -> Result<YamlNode, E> {
        Ok(YamlNode::accepted(Value::Nil))
    }

    fn visit_none<E: de::Error>(self) -> Result<YamlNode, E> {
        Ok(YamlNode::accepted(Value::Nil))
    }

    fn visit_some<D: Deserializer<'de>>(self, deserializer: D) -> Result<YamlNode, D::Error> {
        YamlNode::deserialize(deserializer)
    }

    fn visit_bool<E: de::Error>(self, value: bool) -> Result<YamlNode, E> {
        Ok(YamlNode::accepted(Value::Bool(value)))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<YamlNode, E> {
        Ok(YamlNode::accepted(Value::from(value)))
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<YamlNode, E> {
        Ok(YamlNode::accepted(Value::from(value)))
    }

    fn visit_i128<E: de::Error>(self, value: i128) -> Result<YamlNode, E> {
        Ok(YamlNode::accepted(Value::from(value)))
    }

    fn visit_u128<E: de::Error>(self, value: u128) -> Result<YamlNode, E> {
        Ok(YamlNode::accepted(Value::from(value)))
    }

    fn visit_f64<E: de::Error>(self, value: f64) -> Result<YamlNode, E> {
        Ok(YamlNode::accepted(Value::Float(value)))
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<YamlNode, E> {
        Ok(YamlNode::accepted(Value::from(value)))
    }

    fn visit_string<E: de::Error>(self, value: String) -> Result<YamlNode, E> {
        Ok(YamlNode::accepted(Value::String(value)))
    }

    fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<YamlNode, A::Error> {
        let mut items = Vec::new();
        let mut unsupported = None;
        while let Some(YamlNode(item)) = seq.next_element()? {
            match item {
                Ok(item) => items.push(item),
                Err(err) => {
                    unsupported.get_or_insert(err);
                }
            }
        }
        Ok(YamlNode(unsupported.map_or(Ok(Value::List(items)), Err)))
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<YamlNode, A::Error> {
        let mut entries = BTreeMap::new();
        let mut unsupported = None;
        while let Some(YamlNode(key)) = map.next_key()? {
            let YamlNode(item) = map.next_value()?;
            match (key, item) {
                (Ok(Value::String(key)), Ok(item)) => {
                    entries.insert(key, item);
                }
                (Ok(key), Ok(_)) => {
                    let label = key_label(&key);
                    unsupported.get_or_insert(HashError::unsupported("yaml_key", label));
                }
                (Err(err), _) | (_, Err(err)) => {
                    unsupported.get_or_insert(err);
                }
            }
        }
        Ok(YamlNode(unsupported.map_or(Ok(Value::Map(entries)), Err)))
    }

    fn visit_enum<A: EnumAccess<'de>>(self, data: A) -> Result<YamlNode, A::Error> {
        let (tag, variant) = data.variant::<String>()?;
        variant.newtype_variant::<IgnoredAny>()?;
        Ok(YamlNode(Err(HashError::unsupported("yaml_tag", format!("!{tag}")))))
    }
}

/// Renders a rejected map key for error messages.
fn key_label(key: &Value) -> String {
    serde_json::to_string(key).unwrap_or_else(|_| key.kind().to_string())
}

// ============================================================================
// SECTION: Tests
// ============================================================================
