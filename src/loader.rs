//! Document loading for JSON, YAML, and TOML sources.
//!
//! The diff engine itself only sees decoded [`Value`] trees; this module is
//! the collaborator that produces them. Format detection is by file
//! extension, with a JSON-then-YAML fallback when the extension is unknown.

use crate::error::ParseError;
use crate::value::Value;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Loads a file into a [`Value`] tree.
///
/// The format is detected by extension (`.json`, `.yaml`, `.yml`, `.toml`).
/// Unknown extensions are tried as JSON first, then YAML.
///
/// # Errors
///
/// Returns a [`ParseError`] when the file is missing, unreadable, or does
/// not decode in any supported format.
pub fn load_file(path: &Path) -> Result<Value, ParseError> {
    if !path.exists() {
        return Err(ParseError::file_not_found(path.to_string_lossy()));
    }

    let content = fs::read_to_string(path)
        .map_err(|e| ParseError::read_error(path.to_string_lossy(), e))?;

    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(|s| s.to_lowercase());

    match extension.as_deref() {
        Some("json") => parse_json(&content)
            .map_err(|e| ParseError::json_error(path.to_string_lossy(), e)),
        Some("yaml") | Some("yml") => parse_yaml(&content)
            .map_err(|e| ParseError::yaml_error(path.to_string_lossy(), e)),
        Some("toml") => parse_toml(&content)
            .map_err(|e| ParseError::toml_error(path.to_string_lossy(), e)),
        _ => parse_json(&content)
            .map_err(|_| ())
            .or_else(|_| parse_yaml(&content).map_err(|_| ()))
            .map_err(|_| ParseError::unknown_format(path.to_string_lossy())),
    }
}

/// Parses a JSON string into a [`Value`].
pub fn parse_json(content: &str) -> Result<Value, serde_json::Error> {
    let value: serde_json::Value = serde_json::from_str(content)?;
    Ok(json_to_value(value))
}

/// Parses a YAML string into a [`Value`].
pub fn parse_yaml(content: &str) -> Result<Value, serde_yaml::Error> {
    let value: serde_yaml::Value = serde_yaml::from_str(content)?;
    Ok(yaml_to_value(value))
}

/// Parses a TOML string into a [`Value`].
pub fn parse_toml(content: &str) -> Result<Value, toml::de::Error> {
    let value: toml::Value = content.parse()?;
    Ok(toml_to_value(value))
}

fn json_to_value(value: serde_json::Value) -> Value {
    match value {
        serde_json::Value::Null => Value::Null,
        serde_json::Value::Bool(b) => Value::Bool(b),
        serde_json::Value::Number(n) => Value::Number(n.as_f64().unwrap_or(0.0)),
        serde_json::Value::String(s) => Value::String(s),
        serde_json::Value::Array(arr) => {
            Value::Array(arr.into_iter().map(json_to_value).collect())
        }
        serde_json::Value::Object(obj) => {
            let map: BTreeMap<String, Value> = obj
                .into_iter()
                .map(|(k, v)| (k, json_to_value(v)))
                .collect();
            Value::Object(map)
        }
    }
}

fn yaml_to_value(value: serde_yaml::Value) -> Value {
    match value {
        serde_yaml::Value::Null => Value::Null,
        serde_yaml::Value::Bool(b) => Value::Bool(b),
        serde_yaml::Value::Number(n) => {
            if let Some(f) = n.as_f64() {
                Value::Number(f)
            } else if let Some(i) = n.as_i64() {
                Value::Number(i as f64)
            } else if let Some(u) = n.as_u64() {
                Value::Number(u as f64)
            } else {
                Value::Number(0.0)
            }
        }
        serde_yaml::Value::String(s) => Value::String(s),
        serde_yaml::Value::Sequence(seq) => {
            Value::Array(seq.into_iter().map(yaml_to_value).collect())
        }
        serde_yaml::Value::Mapping(map) => {
            // Non-string YAML keys are stringified so all mappings are
            // string-keyed like JSON objects.
            let map: BTreeMap<String, Value> = map
                .into_iter()
                .map(|(k, v)| {
                    let key = match k {
                        serde_yaml::Value::String(s) => s,
                        serde_yaml::Value::Number(n) => n.to_string(),
                        serde_yaml::Value::Bool(b) => b.to_string(),
                        serde_yaml::Value::Null => "null".to_string(),
                        other => format!("{:?}", other),
                    };
                    (key, yaml_to_value(v))
                })
                .collect();
            Value::Object(map)
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_value(tagged.value),
    }
}

fn toml_to_value(value: toml::Value) -> Value {
    match value {
        toml::Value::String(s) => Value::String(s),
        toml::Value::Integer(i) => Value::Number(i as f64),
        toml::Value::Float(f) => Value::Number(f),
        toml::Value::Boolean(b) => Value::Bool(b),
        toml::Value::Datetime(dt) => Value::String(dt.to_string()),
        toml::Value::Array(arr) => {
            Value::Array(arr.into_iter().map(toml_to_value).collect())
        }
        toml::Value::Table(table) => {
            let map: BTreeMap<String, Value> = table
                .into_iter()
                .map(|(k, v)| (k, toml_to_value(v)))
                .collect();
            Value::Object(map)
        }
    }
}
