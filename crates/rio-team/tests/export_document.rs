//! Export documents: on-disk shape and schema conformance.

use pretty_assertions::assert_eq;
use rio_core::enums::MemberStatus;
use rio_team::seed::seed_members;
use rio_team::{ExportSnapshot, MemberFilters, TeamDirectory};
use schemars::schema_for;

fn schema_errors(instance: &serde_json::Value) -> Vec<String> {
    let schema = serde_json::to_value(schema_for!(ExportSnapshot)).unwrap();
    let validator = jsonschema::validator_for(&schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn empty_directory_still_exports_a_valid_document() {
    let snapshot = TeamDirectory::default().export_snapshot();
    let json = serde_json::to_value(&snapshot).unwrap();

    assert_eq!(json["teamMembers"], serde_json::json!([]));
    assert_eq!(json["filters"], serde_json::json!({}));
    assert!(json["exportDate"].is_string());
    let errors = schema_errors(&json);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn filtered_export_matches_schema() {
    let mut dir = TeamDirectory::new(seed_members());
    dir.set_filters(
        MemberFilters::builder()
            .department("compliance")
            .status(MemberStatus::Active)
            .build(),
    );
    let json = serde_json::to_value(dir.export_snapshot()).unwrap();

    assert_eq!(json["teamMembers"].as_array().unwrap().len(), 3);
    assert_eq!(json["filters"]["status"], "active");
    let errors = schema_errors(&json);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn write_to_creates_dated_file() {
    let dir = tempfile::tempdir().unwrap();
    let target = dir.path().join("exports");

    let snapshot = TeamDirectory::new(seed_members()).export_snapshot();
    let path = snapshot.write_to(&target).unwrap();

    assert_eq!(path, target.join(snapshot.file_name()));
    let read: ExportSnapshot =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(read, snapshot);
}
