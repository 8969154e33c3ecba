//! Recursive tree differ.
//!
//! Compares two [`Value`] trees and produces a flat, path-addressed list of
//! changes. Objects are compared by key union; arrays are compared
//! positionally. There is no move detection: a reordered array without
//! `ignore_order` normalization shows up as paired replacements, which is an
//! intentional trade against LCS-style alignment.

use crate::value::Value;
use std::collections::BTreeSet;

/// The kind of edit a [`Change`] represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOp {
    /// Present on the right side only.
    Add,
    /// Present on the left side only.
    Remove,
    /// Present on both sides with different values.
    Replace,
}

impl ChangeOp {
    /// The lowercase operation name used by the JSON-Patch formatter.
    pub fn name(&self) -> &'static str {
        match self {
            ChangeOp::Add => "add",
            ChangeOp::Remove => "remove",
            ChangeOp::Replace => "replace",
        }
    }
}

/// One path-addressed edit between two trees.
///
/// Paths use dotted/bracketed notation, e.g. `outer.items[2].name`. A
/// root-level replacement has an empty path.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
    pub path: String,
    pub op: ChangeOp,
    /// Present for `Remove` and `Replace`, never for `Add`.
    pub old_value: Option<Value>,
    /// Present for `Add` and `Replace`, never for `Remove`.
    pub new_value: Option<Value>,
    /// Reserved surrounding-lines hint; currently always `None`.
    pub context: Option<String>,
}

impl Change {
    fn added(path: String, value: &Value) -> Self {
        Self {
            path,
            op: ChangeOp::Add,
            old_value: None,
            new_value: Some(value.clone()),
            context: None,
        }
    }

    fn removed(path: String, value: &Value) -> Self {
        Self {
            path,
            op: ChangeOp::Remove,
            old_value: Some(value.clone()),
            new_value: None,
            context: None,
        }
    }

    fn replaced(path: String, old: &Value, new: &Value) -> Self {
        Self {
            path,
            op: ChangeOp::Replace,
            old_value: Some(old.clone()),
            new_value: Some(new.clone()),
            context: None,
        }
    }
}

/// Computes the change list between two trees, starting at the root path.
pub fn diff_values(left: &Value, right: &Value) -> Vec<Change> {
    let mut changes = Vec::new();
    walk("", left, right, &mut changes);
    changes
}

fn walk(path: &str, left: &Value, right: &Value, changes: &mut Vec<Change>) {
    // Equality short-circuit before type dispatch; deeply equal
    // subtrees cost one comparison instead of a full recursion.
    if left == right {
        return;
    }

    match (left, right) {
        (Value::Object(left_map), Value::Object(right_map)) => {
            let keys: BTreeSet<&String> = left_map.keys().chain(right_map.keys()).collect();
            for key in keys {
                let child_path = join_key(path, key);
                match (left_map.get(key.as_str()), right_map.get(key.as_str())) {
                    (None, Some(added)) => changes.push(Change::added(child_path, added)),
                    (Some(removed), None) => changes.push(Change::removed(child_path, removed)),
                    (Some(old), Some(new)) => walk(&child_path, old, new, changes),
                    (None, None) => unreachable!("key came from one of the maps"),
                }
            }
        }
        (Value::Array(left_arr), Value::Array(right_arr)) => {
            let max_len = left_arr.len().max(right_arr.len());
            for i in 0..max_len {
                let child_path = format!("{path}[{i}]");
                match (left_arr.get(i), right_arr.get(i)) {
                    (None, Some(added)) => changes.push(Change::added(child_path, added)),
                    (Some(removed), None) => changes.push(Change::removed(child_path, removed)),
                    (Some(old), Some(new)) => walk(&child_path, old, new, changes),
                    (None, None) => unreachable!("index is below max_len"),
                }
            }
        }
        _ => changes.push(Change::replaced(path.to_string(), left, right)),
    }
}

fn join_key(path: &str, key: &str) -> String {
    if path.is_empty() {
        key.to_string()
    } else {
        format!("{path}.{key}")
    }
}
