//! Input normalization: deep copy, metadata stripping, and
//! order-independent array canonicalization.
//!
//! Normalization runs before the diff so that differences a caller asked to
//! ignore never reach the differ. It always operates on a copy; the inputs
//! handed to [`normalize`] are never mutated.

use crate::value::Value;
use std::cmp::Ordering;

/// Metadata paths stripped when `ignore_metadata` is set. All rooted at a
/// top-level `metadata` mapping; removal never descends into arrays.
pub const METADATA_IGNORE_PATHS: [&str; 8] = [
    "metadata.createdAt",
    "metadata.updatedAt",
    "metadata.version",
    "metadata.modifiedBy",
    "metadata.creationTimestamp",
    "metadata.resourceVersion",
    "metadata.generation",
    "metadata.uid",
];

/// Keys that mark an array element as stably identified, in priority order.
const STABLE_KEYS: [&str; 3] = ["id", "name", "key"];

/// Options controlling normalization.
#[derive(Debug, Clone, Copy, Default)]
pub struct NormalizeOptions {
    /// Strip the fixed [`METADATA_IGNORE_PATHS`] before diffing.
    pub ignore_metadata: bool,
    /// Canonicalize the order of arrays whose elements carry stable keys.
    pub ignore_order: bool,
}

/// Produces a sanitized, independent copy of `value` per the options.
pub fn normalize(value: &Value, options: &NormalizeOptions) -> Value {
    let mut copy = deep_copy(value);

    if options.ignore_metadata {
        for path in METADATA_IGNORE_PATHS {
            remove_path(&mut copy, path);
        }
    }

    if options.ignore_order {
        canonicalize_order(&mut copy);
    }

    copy
}

/// Deep copy via a serde_json round trip.
///
/// Non-finite numbers cannot round-trip through JSON without turning into
/// nulls, so trees containing them skip the round trip. Either degradation
/// falls back to a plain clone of the original value.
fn deep_copy(value: &Value) -> Value {
    if has_non_finite(value) {
        tracing::warn!("deep copy skipped for tree with non-finite numbers; using original value");
        return value.clone();
    }

    match serde_json::to_value(value).and_then(serde_json::from_value) {
        Ok(copy) => copy,
        Err(err) => {
            tracing::warn!(error = %err, "deep copy round trip failed; using original value");
            value.clone()
        }
    }
}

fn has_non_finite(value: &Value) -> bool {
    match value {
        Value::Number(n) => !n.is_finite(),
        Value::Array(items) => items.iter().any(has_non_finite),
        Value::Object(map) => map.values().any(has_non_finite),
        _ => false,
    }
}

/// Removes a dotted path from a mapping tree. Missing keys or non-mapping
/// intermediates make this a silent no-op.
fn remove_path(root: &mut Value, path: &str) {
    let mut segments = path.split('.').peekable();
    let mut current = root;

    while let Some(segment) = segments.next() {
        let Value::Object(map) = current else {
            return;
        };
        if segments.peek().is_none() {
            map.remove(segment);
            return;
        }
        match map.get_mut(segment) {
            Some(next) => current = next,
            None => return,
        }
    }
}

/// Recursively sorts arrays whose elements all carry a stable key.
///
/// Arrays with any non-mapping element, or any element missing all stable
/// keys, keep their original order: positional arrays (command lists,
/// ordered steps) must not be silently reordered.
fn canonicalize_order(value: &mut Value) {
    match value {
        Value::Object(map) => {
            for child in map.values_mut() {
                canonicalize_order(child);
            }
        }
        Value::Array(items) => {
            if is_sortable(items) {
                items.sort_by(compare_keyed);
            }
            for item in items.iter_mut() {
                canonicalize_order(item);
            }
        }
        _ => {}
    }
}

fn is_sortable(items: &[Value]) -> bool {
    items.iter().all(|item| {
        item.is_object() && STABLE_KEYS.iter().any(|key| item.get(key).is_some())
    })
}

/// Orders two keyed elements by the first stable key present in both.
fn compare_keyed(a: &Value, b: &Value) -> Ordering {
    for key in STABLE_KEYS {
        if let (Some(left), Some(right)) = (a.get(key), b.get(key)) {
            return compare_sort_values(left, right);
        }
    }
    Ordering::Equal
}

fn compare_sort_values(a: &Value, b: &Value) -> Ordering {
    if let (Value::String(x), Value::String(y)) = (a, b) {
        return x.cmp(y);
    }
    if let (Some(x), Some(y)) = (numeric_sort_key(a), numeric_sort_key(b)) {
        return x.partial_cmp(&y).unwrap_or(Ordering::Equal);
    }
    fallback_repr(a).cmp(&fallback_repr(b))
}

fn numeric_sort_key(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => Some(*n),
        Value::String(s) => s.parse::<f64>().ok(),
        _ => None,
    }
}

fn fallback_repr(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => s.clone(),
        other => serde_json::to_string(other).unwrap_or_default(),
    }
}
