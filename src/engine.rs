//! Differ facade: normalize, diff, summarize, render.
//!
//! This is the single public entry point. A [`Differ`] holds only options,
//! so it is cheap to build and freely shareable; every comparison allocates
//! its own result.

use crate::diff::{diff_values, Change};
use crate::error::DiffError;
use crate::format::{render_patch, PatchFormat};
use crate::loader::load_file;
use crate::normalize::{normalize, NormalizeOptions};
use crate::summary::{summarize, DiffSummary};
use crate::value::Value;
use std::path::Path;

/// Options accepted by the facade.
#[derive(Debug, Clone, Default)]
pub struct DiffOptions {
    /// Which formatter renders the patch text.
    pub format: PatchFormat,
    /// Strip the fixed metadata paths before diffing.
    pub ignore_metadata: bool,
    /// Canonicalize keyed arrays before diffing.
    pub ignore_order: bool,
    /// Reserved sizing hint for the unified formatter.
    pub context_lines: usize,
    /// Reserved display hint; never affects the computed patch.
    pub colorize: bool,
    /// Forces the semantic formatter regardless of `format`.
    pub semantic: bool,
}

/// The complete output of one comparison.
#[derive(Debug, Clone)]
pub struct DiffResult {
    pub has_changes: bool,
    pub changes: Vec<Change>,
    pub summary: DiffSummary,
    /// The rendered patch text in the selected format.
    pub patch: String,
    pub left_label: String,
    pub right_label: String,
}

/// The structural diff engine facade.
#[derive(Debug, Clone, Default)]
pub struct Differ {
    options: DiffOptions,
}

impl Differ {
    pub fn new(options: DiffOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &DiffOptions {
        &self.options
    }

    /// Compares two decoded trees and renders the patch.
    ///
    /// # Errors
    ///
    /// Fails when the selected formatter cannot render the change list;
    /// no partial result is returned.
    pub fn compare(
        &self,
        left: &Value,
        right: &Value,
        left_label: &str,
        right_label: &str,
    ) -> Result<DiffResult, DiffError> {
        let normalize_options = NormalizeOptions {
            ignore_metadata: self.options.ignore_metadata,
            ignore_order: self.options.ignore_order,
        };
        let left = normalize(left, &normalize_options);
        let right = normalize(right, &normalize_options);

        let changes = diff_values(&left, &right);
        let summary = summarize(&changes);

        let mut result = DiffResult {
            has_changes: !changes.is_empty(),
            changes,
            summary,
            patch: String::new(),
            left_label: left_label.to_string(),
            right_label: right_label.to_string(),
        };

        let format = if self.options.semantic {
            PatchFormat::Semantic
        } else {
            self.options.format
        };
        result.patch = render_patch(&result, format)?;

        Ok(result)
    }

    /// Loads two files and compares them, using the file paths as labels.
    ///
    /// # Errors
    ///
    /// Load failures are wrapped so the error names which side failed;
    /// formatter failures propagate as in [`Differ::compare`].
    pub fn compare_files(&self, left: &Path, right: &Path) -> Result<DiffResult, DiffError> {
        let left_value = load_file(left).map_err(|source| DiffError::Load {
            side: "left",
            source,
        })?;
        let right_value = load_file(right).map_err(|source| DiffError::Load {
            side: "right",
            source,
        })?;

        self.compare(
            &left_value,
            &right_value,
            &left.to_string_lossy(),
            &right.to_string_lossy(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::parse_json;
    use crate::summary::ImpactLevel;

    #[test]
    fn equal_inputs_have_no_changes() {
        let value = parse_json(r#"{"a": 1}"#).unwrap();
        let result = Differ::default()
            .compare(&value, &value, "left", "right")
            .unwrap();
        assert!(!result.has_changes);
        assert!(result.changes.is_empty());
        assert_eq!(result.patch, "");
        assert_eq!(result.left_label, "left");
        assert_eq!(result.right_label, "right");
    }

    #[test]
    fn single_key_replace_end_to_end() {
        let left = parse_json(r#"{"key": "old"}"#).unwrap();
        let right = parse_json(r#"{"key": "new"}"#).unwrap();
        let result = Differ::default()
            .compare(&left, &right, "a.json", "b.json")
            .unwrap();

        assert!(result.has_changes);
        assert_eq!(result.changes.len(), 1);
        assert_eq!(result.changes[0].path, "key");
        assert_eq!(result.summary.modified, 1);
        assert_eq!(result.summary.impact, ImpactLevel::Low);
        assert!(result.patch.starts_with("--- a.json\n+++ b.json\n"));
    }

    #[test]
    fn semantic_flag_overrides_named_format() {
        let left = parse_json(r#"{"key": "old"}"#).unwrap();
        let right = parse_json(r#"{"key": "new"}"#).unwrap();
        let differ = Differ::new(DiffOptions {
            format: PatchFormat::JsonPatch,
            semantic: true,
            ..Default::default()
        });
        let result = differ.compare(&left, &right, "a", "b").unwrap();
        assert!(result.patch.starts_with("Comparing: a vs b\n"));
    }

    #[test]
    fn inputs_are_not_mutated_by_normalization() {
        let left = parse_json(r#"{"metadata": {"version": 1}, "x": 1}"#).unwrap();
        let right = parse_json(r#"{"metadata": {"version": 2}, "x": 1}"#).unwrap();
        let original = left.clone();

        let differ = Differ::new(DiffOptions {
            ignore_metadata: true,
            ..Default::default()
        });
        let result = differ.compare(&left, &right, "a", "b").unwrap();
        assert!(!result.has_changes);
        assert_eq!(left, original);
    }
}
