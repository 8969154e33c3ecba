//! Patch rendering.
//!
//! Four independent renderers over the same change list: unified-diff
//! style, side-by-side columns, a JSON-Patch-like operation array, and a
//! prose "semantic" report. Each has an explicit no-changes sentinel and
//! never inspects the change list when the result is empty.

use crate::diff::{Change, ChangeOp};
use crate::engine::DiffResult;
use crate::error::FormatError;
use crate::value::{number_repr, Value};

/// Total width of the side-by-side layout, split into two columns.
const SIDE_BY_SIDE_WIDTH: usize = 100;

/// The available patch renderings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PatchFormat {
    #[default]
    Unified,
    SideBySide,
    JsonPatch,
    Semantic,
}

/// Renders a diff result in the requested format.
///
/// # Errors
///
/// Fails with [`FormatError`] when a value cannot be serialized for
/// display; no partial text is returned.
pub fn render_patch(result: &DiffResult, format: PatchFormat) -> Result<String, FormatError> {
    match format {
        PatchFormat::Unified => format_unified(result),
        PatchFormat::SideBySide => format_side_by_side(result),
        PatchFormat::JsonPatch => format_json_patch(result),
        PatchFormat::Semantic => format_semantic(result),
    }
}

/// `--- left` / `+++ right` header, one `+`/`-` line per change, replace
/// as a `-` line followed by a `+` line.
fn format_unified(result: &DiffResult) -> Result<String, FormatError> {
    if !result.has_changes {
        return Ok(String::new());
    }

    let mut out = String::new();
    out.push_str(&format!("--- {}\n", result.left_label));
    out.push_str(&format!("+++ {}\n", result.right_label));

    for change in &result.changes {
        let path = display_path(&change.path);
        match change.op {
            ChangeOp::Add => {
                out.push_str(&format!("+ {}: {}\n", path, render_value(new_of(change))?));
            }
            ChangeOp::Remove => {
                out.push_str(&format!("- {}: {}\n", path, render_value(old_of(change))?));
            }
            ChangeOp::Replace => {
                out.push_str(&format!("- {}: {}\n", path, render_value(old_of(change))?));
                out.push_str(&format!("+ {}: {}\n", path, render_value(new_of(change))?));
            }
        }
    }

    Ok(out)
}

/// Two fixed-width columns: removals on the left, additions on the right,
/// replacements in both.
fn format_side_by_side(result: &DiffResult) -> Result<String, FormatError> {
    if !result.has_changes {
        return Ok(String::new());
    }

    let col = (SIDE_BY_SIDE_WIDTH - 3) / 2;
    let mut out = String::new();
    out.push_str(&format!(
        "{:<col$} | {:<col$}\n",
        truncate_cell(&result.left_label, col),
        truncate_cell(&result.right_label, col),
    ));
    out.push_str(&"-".repeat(SIDE_BY_SIDE_WIDTH));
    out.push('\n');

    for change in &result.changes {
        let path = display_path(&change.path);
        let left_cell = match change.op {
            ChangeOp::Add => String::new(),
            ChangeOp::Remove | ChangeOp::Replace => {
                format!("{}: {}", path, render_value(old_of(change))?)
            }
        };
        let right_cell = match change.op {
            ChangeOp::Remove => String::new(),
            ChangeOp::Add | ChangeOp::Replace => {
                format!("{}: {}", path, render_value(new_of(change))?)
            }
        };
        out.push_str(&format!(
            "{:<col$} | {:<col$}\n",
            truncate_cell(&left_cell, col),
            truncate_cell(&right_cell, col),
        ));
    }

    Ok(out)
}

/// JSON array of `{op, path, value?}` objects. Dotted paths become
/// slash-delimited pointers; literal dots in keys are not escaped and
/// array indices are not distinguished, so this is a display convenience,
/// not RFC 6902.
fn format_json_patch(result: &DiffResult) -> Result<String, FormatError> {
    if !result.has_changes {
        return Ok("[]".to_string());
    }

    let mut operations = Vec::with_capacity(result.changes.len());
    for change in &result.changes {
        let mut op = serde_json::Map::new();
        op.insert(
            "op".to_string(),
            serde_json::Value::String(change.op.name().to_string()),
        );
        op.insert(
            "path".to_string(),
            serde_json::Value::String(pointer_path(&change.path)),
        );
        if change.op != ChangeOp::Remove {
            let value = serde_json::to_value(new_of(change))
                .map_err(|source| FormatError::JsonSerialization { source })?;
            op.insert("value".to_string(), value);
        }
        operations.push(serde_json::Value::Object(op));
    }

    serde_json::to_string_pretty(&operations)
        .map_err(|source| FormatError::JsonSerialization { source })
}

/// Prose report: comparison header, one bullet per change, summary trailer.
fn format_semantic(result: &DiffResult) -> Result<String, FormatError> {
    if !result.has_changes {
        return Ok("No changes detected\n".to_string());
    }

    let mut out = String::new();
    out.push_str(&format!(
        "Comparing: {} vs {}\n\n",
        result.left_label, result.right_label
    ));

    for change in &result.changes {
        let path = display_path(&change.path);
        match change.op {
            ChangeOp::Add => {
                out.push_str(&format!("+ {}: {}\n", path, render_value(new_of(change))?));
            }
            ChangeOp::Remove => {
                out.push_str(&format!("- {}: {}\n", path, render_value(old_of(change))?));
            }
            ChangeOp::Replace => {
                out.push_str(&format!(
                    "~ {}: {} → {}\n",
                    path,
                    render_value(old_of(change))?,
                    render_value(new_of(change))?
                ));
            }
        }
    }

    let summary = &result.summary;
    out.push_str(&format!(
        "\nSummary: {} added, {} removed, {} modified (impact: {})\n",
        summary.added, summary.removed, summary.modified, summary.impact
    ));

    Ok(out)
}

/// Renders a value for display: strings quoted, containers as compact
/// JSON, other scalars in their default text form.
fn render_value(value: &Value) -> Result<String, FormatError> {
    match value {
        Value::Null => Ok("null".to_string()),
        Value::Bool(b) => Ok(b.to_string()),
        Value::Number(n) => Ok(number_repr(*n)),
        Value::String(s) => Ok(format!("\"{}\"", s)),
        Value::Array(_) | Value::Object(_) => serde_json::to_string(value)
            .map_err(|source| FormatError::JsonSerialization { source }),
    }
}

/// Converts a dotted path to the slash-delimited pointer used by the
/// JSON-Patch formatter.
fn pointer_path(path: &str) -> String {
    format!("/{}", path.replace('.', "/"))
}

fn display_path(path: &str) -> &str {
    if path.is_empty() {
        "(root)"
    } else {
        path
    }
}

fn truncate_cell(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let kept: String = text.chars().take(width.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

// Invariant accessors: a change always carries the side its operation
// requires, so a missing value is a differ bug, not an input error.
fn old_of(change: &Change) -> &Value {
    change
        .old_value
        .as_ref()
        .unwrap_or_else(|| panic!("{:?} change without old value", change.op))
}

fn new_of(change: &Change) -> &Value {
    change
        .new_value
        .as_ref()
        .unwrap_or_else(|| panic!("{:?} change without new value", change.op))
}
