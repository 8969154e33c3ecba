//! Normalization behavior: metadata stripping and order canonicalization
//! observed through the facade.

use tdiff::{
    diff_values, normalize, parse_json, DiffOptions, Differ, NormalizeOptions, Value,
    METADATA_IGNORE_PATHS,
};

fn differ(ignore_metadata: bool, ignore_order: bool) -> Differ {
    Differ::new(DiffOptions {
        ignore_metadata,
        ignore_order,
        ..Default::default()
    })
}

#[test]
fn metadata_only_differences_vanish_when_ignored() {
    let left = parse_json(
        r#"{"metadata": {"createdAt": "2024-01-01", "version": 1}, "spec": {"replicas": 2}}"#,
    )
    .unwrap();
    let right = parse_json(
        r#"{"metadata": {"createdAt": "2024-06-01", "version": 2}, "spec": {"replicas": 2}}"#,
    )
    .unwrap();

    let ignored = differ(true, false).compare(&left, &right, "a", "b").unwrap();
    assert!(!ignored.has_changes);

    let strict = differ(false, false).compare(&left, &right, "a", "b").unwrap();
    assert!(strict.has_changes);
    assert_eq!(strict.summary.modified, 2);
}

#[test]
fn non_metadata_fields_survive_stripping() {
    let left = parse_json(r#"{"metadata": {"version": 1, "labels": {"app": "x"}}}"#).unwrap();
    let right = parse_json(r#"{"metadata": {"version": 2, "labels": {"app": "y"}}}"#).unwrap();

    let result = differ(true, false).compare(&left, &right, "a", "b").unwrap();
    assert!(result.has_changes);
    assert_eq!(result.changes[0].path, "metadata.labels.app");
}

#[test]
fn metadata_inside_arrays_is_not_stripped() {
    let left = parse_json(r#"{"list": [{"metadata": {"version": 1}}]}"#).unwrap();
    let right = parse_json(r#"{"list": [{"metadata": {"version": 2}}]}"#).unwrap();
    let result = differ(true, false).compare(&left, &right, "a", "b").unwrap();
    assert!(result.has_changes);
}

#[test]
fn ignore_path_table_is_rooted_at_metadata() {
    for path in METADATA_IGNORE_PATHS {
        assert!(path.starts_with("metadata."));
    }
}

#[test]
fn permuted_keyed_arrays_compare_equal_with_ignore_order() {
    let left = parse_json(r#"[{"id": "1", "name": "first"}, {"id": "2", "name": "second"}]"#)
        .unwrap();
    let right = parse_json(r#"[{"id": "2", "name": "second"}, {"id": "1", "name": "first"}]"#)
        .unwrap();

    let result = differ(false, true).compare(&left, &right, "a", "b").unwrap();
    assert!(!result.has_changes);

    let strict = differ(false, false).compare(&left, &right, "a", "b").unwrap();
    assert!(strict.has_changes);
}

#[test]
fn unkeyed_arrays_are_still_positional_with_ignore_order() {
    let left = parse_json(r#"{"steps": ["build", "test", "deploy"]}"#).unwrap();
    let right = parse_json(r#"{"steps": ["test", "build", "deploy"]}"#).unwrap();
    let result = differ(false, true).compare(&left, &right, "a", "b").unwrap();
    assert!(result.has_changes);
    assert_eq!(result.summary.modified, 2);
}

#[test]
fn mixed_element_arrays_are_not_reordered() {
    let left = parse_json(r#"[{"id": "b"}, "scalar", {"id": "a"}]"#).unwrap();
    let options = NormalizeOptions {
        ignore_metadata: false,
        ignore_order: true,
    };
    assert_eq!(normalize(&left, &options), left);
}

#[test]
fn normalization_result_diffs_clean_against_itself() {
    let value = parse_json(
        r#"{"metadata": {"uid": "x", "generation": 4}, "items": [{"key": "b"}, {"key": "a"}]}"#,
    )
    .unwrap();
    let options = NormalizeOptions {
        ignore_metadata: true,
        ignore_order: true,
    };
    let once = normalize(&value, &options);
    let twice = normalize(&once, &options);
    assert!(diff_values(&once, &twice).is_empty());
}

#[test]
fn degraded_copy_path_does_not_panic_or_drop_data() {
    let value = Value::Object(
        [
            ("ok".to_string(), Value::Number(1.0)),
            ("inf".to_string(), Value::Number(f64::INFINITY)),
        ]
        .into_iter()
        .collect(),
    );
    let normalized = normalize(&value, &NormalizeOptions::default());
    assert_eq!(normalized.get("ok"), Some(&Value::Number(1.0)));
    assert!(matches!(
        normalized.get("inf"),
        Some(Value::Number(n)) if n.is_infinite()
    ));
}
