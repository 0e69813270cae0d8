//! Member filter set and its builder.

use rio_core::entities::TeamMember;
use rio_core::enums::MemberStatus;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Exact-match criteria, AND-combined. Unset fields match everything, as do
/// blank text fields and the literal `all`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MemberFilters {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<MemberStatus>,
}

impl MemberFilters {
    #[must_use]
    pub fn builder() -> MemberFiltersBuilder {
        MemberFiltersBuilder::new()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        constraint(self.department.as_deref()).is_none()
            && constraint(self.role.as_deref()).is_none()
            && self.status.is_none()
    }

    #[must_use]
    pub fn matches(&self, member: &TeamMember) -> bool {
        constraint(self.department.as_deref()).is_none_or(|dept| member.department == dept)
            && constraint(self.role.as_deref()).is_none_or(|role| member.role == role)
            && self.status.is_none_or(|status| member.status == status)
    }
}

fn constraint(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty() && !v.eq_ignore_ascii_case("all"))
}

pub struct MemberFiltersBuilder(MemberFilters);

impl MemberFiltersBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self(MemberFilters::default())
    }

    #[must_use]
    pub fn department(mut self, department: impl Into<String>) -> Self {
        self.0.department = Some(department.into());
        self
    }

    #[must_use]
    pub fn role(mut self, role: impl Into<String>) -> Self {
        self.0.role = Some(role.into());
        self
    }

    #[must_use]
    pub const fn status(mut self, status: MemberStatus) -> Self {
        self.0.status = Some(status);
        self
    }

    #[must_use]
    pub fn build(self) -> MemberFilters {
        self.0
    }
}

impl Default for MemberFiltersBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed::seed_members;

    #[test]
    fn empty_filters_serialize_to_empty_object() {
        let json = serde_json::to_value(MemberFilters::default()).unwrap();
        assert_eq!(json, serde_json::json!({}));
    }

    #[test]
    fn builder_sets_only_named_fields() {
        let filters = MemberFilters::builder()
            .status(MemberStatus::Pending)
            .build();
        assert!(!filters.is_empty());
        assert_eq!(
            serde_json::to_value(&filters).unwrap(),
            serde_json::json!({ "status": "pending" })
        );
    }

    #[test]
    fn fields_are_and_combined() {
        let members = seed_members();
        let filters = MemberFilters::builder()
            .department("academic")
            .role("staff")
            .build();
        assert!(members.iter().all(|m| !filters.matches(m)));

        let filters = MemberFilters::builder()
            .department("academic")
            .role("manager")
            .build();
        let hits: Vec<&str> = members
            .iter()
            .filter(|m| filters.matches(m))
            .map(|m| m.id.as_str())
            .collect();
        assert_eq!(hits, vec!["michael"]);
    }

    #[test]
    fn blank_and_all_values_do_not_constrain() {
        let members = seed_members();
        let filters = MemberFilters {
            department: Some(String::new()),
            role: Some("all".into()),
            status: None,
        };
        assert!(filters.is_empty());
        assert_eq!(members.iter().filter(|m| filters.matches(m)).count(), members.len());
    }
}
