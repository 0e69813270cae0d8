use serde::de::DeserializeOwned;

/// Parse a lowercase enum value through its serde representation.
pub fn parse_enum<T>(raw: &str, field: &str) -> anyhow::Result<T>
where
    T: DeserializeOwned,
{
    let normalized = raw.trim().to_ascii_lowercase();
    serde_json::from_value(serde_json::Value::String(normalized))
        .map_err(|error| anyhow::anyhow!("invalid {field} '{raw}': {error}"))
}

#[cfg(test)]
mod tests {
    use rio_core::enums::{Capability, MemberStatus, Plan};

    use super::parse_enum;

    #[test]
    fn parses_lowercase_enum() {
        let plan: Plan = parse_enum("enterprise", "plan").expect("plan should parse");
        assert_eq!(plan, Plan::Enterprise);
    }

    #[test]
    fn ignores_case_and_whitespace() {
        let status: MemberStatus = parse_enum(" Pending ", "status").expect("status should parse");
        assert_eq!(status, MemberStatus::Pending);
        let cap: Capability = parse_enum("REPORTS", "capability").expect("capability should parse");
        assert_eq!(cap, Capability::Reports);
    }

    #[test]
    fn errors_on_invalid_enum() {
        let err = parse_enum::<Plan>("platinum", "plan").expect_err("should fail");
        assert!(err.to_string().contains("invalid plan 'platinum'"));
    }
}
