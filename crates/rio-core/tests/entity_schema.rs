//! JsonSchema validation for the entity shapes exchanged with the backend.

use chrono::{NaiveDate, TimeZone, Utc};
use schemars::schema_for;
use rio_core::entities::{TaskStats, TeamMember, Tenant};
use rio_core::enums::{MemberStatus, Plan, TenantStatus};
use rio_core::roles;

fn schema_errors(schema: &serde_json::Value, instance: &serde_json::Value) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

#[test]
fn tenant_matches_its_schema() {
    let tenant = Tenant {
        id: "acmi".into(),
        name: "ACMI Education".into(),
        subdomain: "acmi".into(),
        plan: Plan::Professional,
        status: TenantStatus::Active,
        user_count: 15,
        storage_used: "2.3GB".into(),
        compliance_score: 87,
        created_at: NaiveDate::from_ymd_opt(2023, 1, 15).unwrap(),
    };

    let schema = serde_json::to_value(schema_for!(Tenant)).unwrap();
    let instance = serde_json::to_value(&tenant).unwrap();
    let errors = schema_errors(&schema, &instance);
    assert!(errors.is_empty(), "{errors:?}");
    assert_eq!(instance["complianceScore"], 87);
    assert_eq!(instance["createdAt"], "2023-01-15");
}

#[test]
fn member_with_override_matches_its_schema() {
    let member = TeamMember {
        id: "michael".into(),
        name: "Michael Chen".into(),
        email: "michael.c@acmi.edu".into(),
        role: "manager".into(),
        department: "academic".into(),
        status: MemberStatus::Active,
        task_stats: TaskStats::new(8, 12, 1).unwrap(),
        last_active_at: Some(Utc.with_ymd_and_hms(2024, 5, 2, 14, 32, 0).unwrap()),
        permissions: Some(roles::resolve("auditor")),
    };

    let schema = serde_json::to_value(schema_for!(TeamMember)).unwrap();
    let instance = serde_json::to_value(&member).unwrap();
    let errors = schema_errors(&schema, &instance);
    assert!(errors.is_empty(), "{errors:?}");
}

#[test]
fn unknown_plan_is_rejected_by_schema() {
    let schema = serde_json::to_value(schema_for!(Tenant)).unwrap();
    let instance = serde_json::json!({
        "id": "x", "name": "X", "subdomain": "x", "plan": "platinum",
        "status": "active", "userCount": 1, "storageUsed": "0",
        "complianceScore": 0, "createdAt": "2024-01-01"
    });
    assert!(!schema_errors(&schema, &instance).is_empty());
}
