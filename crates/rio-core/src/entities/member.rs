use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::MemberStatus;
use crate::errors::CoreError;
use crate::roles::{self, PermissionSet};

/// Task completion counters for a member. `completed + overdue <= total`.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct TaskStats {
    pub completed: u32,
    pub total: u32,
    pub overdue: u32,
}

impl TaskStats {
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when completed and overdue tasks
    /// outnumber the total.
    pub fn new(completed: u32, total: u32, overdue: u32) -> Result<Self, CoreError> {
        let stats = Self {
            completed,
            total,
            overdue,
        };
        if stats.is_consistent() {
            Ok(stats)
        } else {
            Err(CoreError::Validation(format!(
                "task stats inconsistent: {completed} completed + {overdue} overdue > {total} total"
            )))
        }
    }

    #[must_use]
    pub const fn is_consistent(&self) -> bool {
        // u64 so the sum cannot overflow
        self.completed as u64 + self.overdue as u64 <= self.total as u64
    }

    #[must_use]
    pub const fn open(&self) -> u32 {
        self.total.saturating_sub(self.completed)
    }
}

/// A person in the tenant's team directory.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Role template id. Unknown ids fall back to staff permissions.
    pub role: String,
    pub department: String,
    pub status: MemberStatus,
    pub task_stats: TaskStats,
    pub last_active_at: Option<DateTime<Utc>>,
    /// Per-member access override set through an access update.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub permissions: Option<PermissionSet>,
}

impl TeamMember {
    /// The override if one was set, otherwise the role template's grants.
    #[must_use]
    pub fn effective_permissions(&self) -> PermissionSet {
        self.permissions
            .clone()
            .unwrap_or_else(|| roles::resolve(&self.role))
    }

    /// Case-insensitive substring match on name, email, department, or role.
    ///
    /// `needle` must already be lowercased.
    #[must_use]
    pub fn matches_lowercase(&self, needle: &str) -> bool {
        [&self.name, &self.email, &self.department, &self.role]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::Capability;

    fn member(role: &str) -> TeamMember {
        TeamMember {
            id: "sarah".into(),
            name: "Sarah Johnson".into(),
            email: "sarah.j@acmi.edu".into(),
            role: role.into(),
            department: "compliance".into(),
            status: MemberStatus::Active,
            task_stats: TaskStats::new(12, 15, 0).unwrap(),
            last_active_at: None,
            permissions: None,
        }
    }

    #[test]
    fn task_stats_reject_overcounting() {
        assert!(TaskStats::new(3, 8, 3).is_ok());
        assert!(TaskStats::new(6, 8, 3).is_err());
        assert!(TaskStats::new(u32::MAX, u32::MAX, 1).is_err());
    }

    #[test]
    fn override_beats_role_template() {
        let mut m = member("trainer");
        assert!(!m.effective_permissions().allows(Capability::Reports));

        let mut custom = roles::resolve("trainer");
        custom.set(Capability::Reports, true);
        m.permissions = Some(custom);
        assert!(m.effective_permissions().allows(Capability::Reports));
    }

    #[test]
    fn matching_ignores_case_across_fields() {
        let m = member("compliance-admin");
        assert!(m.matches_lowercase("johnson"));
        assert!(m.matches_lowercase("acmi.edu"));
        assert!(m.matches_lowercase("admin"));
        assert!(!m.matches_lowercase("academic"));
    }

    #[test]
    fn override_is_omitted_from_json_when_unset() {
        let json = serde_json::to_value(member("staff")).unwrap();
        assert!(json.get("permissions").is_none());
        assert_eq!(json["taskStats"]["completed"], 12);
        assert!(json["lastActiveAt"].is_null());
    }
}
