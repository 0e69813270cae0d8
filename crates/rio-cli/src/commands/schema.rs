use rio_core::entities::{TeamMember, Tenant};
use rio_team::ExportSnapshot;
use schemars::schema_for;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::SchemaArgs;
use crate::output::output;

const TYPES: &[&str] = &["tenant", "team-member", "team-export"];

/// Handle `rio schema`.
pub fn handle(args: &SchemaArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&schema_for_type(&args.type_name)?, flags.format)
}

fn schema_for_type(type_name: &str) -> anyhow::Result<serde_json::Value> {
    let schema = match type_name {
        "tenant" => schema_for!(Tenant),
        "team-member" => schema_for!(TeamMember),
        "team-export" => schema_for!(ExportSnapshot),
        other => anyhow::bail!("unknown schema type '{other}' (expected one of: {})", TYPES.join(", ")),
    };
    Ok(serde_json::to_value(schema)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_listed_type_has_a_schema() {
        for name in TYPES {
            let schema = schema_for_type(name).unwrap();
            assert!(schema.get("properties").is_some(), "{name}");
        }
    }

    #[test]
    fn export_schema_names_camel_case_fields() {
        let schema = schema_for_type("team-export").unwrap();
        assert!(schema["properties"].get("teamMembers").is_some());
        assert!(schema["properties"].get("exportDate").is_some());
    }

    #[test]
    fn unknown_type_lists_choices() {
        let err = schema_for_type("invoice").unwrap_err();
        assert!(err.to_string().contains("team-member"));
    }
}
