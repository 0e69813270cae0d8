//! Plans, statuses, capabilities, and bulk actions.
//!
//! All enums serialize lowercase. Status enums with a lifecycle provide
//! `allowed_next_states()` so callers can reject invalid transitions.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::CoreError;

// ---------------------------------------------------------------------------
// Plan
// ---------------------------------------------------------------------------

/// Subscription plan of a tenant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum Plan {
    Trial,
    Basic,
    Professional,
    Enterprise,
}

impl Plan {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Trial => "trial",
            Self::Basic => "basic",
            Self::Professional => "professional",
            Self::Enterprise => "enterprise",
        }
    }
}

impl fmt::Display for Plan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// TenantStatus
// ---------------------------------------------------------------------------

/// Lifecycle status of a tenant. Tenants are suspended, never deleted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum TenantStatus {
    Active,
    Trial,
    Suspended,
}

impl TenantStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Trial => "trial",
            Self::Suspended => "suspended",
        }
    }
}

impl fmt::Display for TenantStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// MemberStatus
// ---------------------------------------------------------------------------

/// Status of a team member.
///
/// ```text
/// pending → active
///         → suspended
/// active → suspended
/// suspended → pending (re-invited)
///           → active
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Pending,
    Suspended,
}

impl MemberStatus {
    #[must_use]
    pub const fn allowed_next_states(self) -> &'static [Self] {
        match self {
            Self::Pending => &[Self::Active, Self::Suspended],
            Self::Active => &[Self::Suspended],
            Self::Suspended => &[Self::Pending, Self::Active],
        }
    }

    #[must_use]
    pub fn can_transition_to(self, next: Self) -> bool {
        self.allowed_next_states().contains(&next)
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Pending => "pending",
            Self::Suspended => "suspended",
        }
    }
}

impl fmt::Display for MemberStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Capability
// ---------------------------------------------------------------------------

/// A feature area gated by a permission flag.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum Capability {
    Dashboard,
    Policies,
    Tasks,
    Registers,
    Reports,
    Files,
    Admin,
    Team,
}

impl Capability {
    /// Every capability, in display order.
    pub const ALL: [Self; 8] = [
        Self::Dashboard,
        Self::Policies,
        Self::Tasks,
        Self::Registers,
        Self::Reports,
        Self::Files,
        Self::Admin,
        Self::Team,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dashboard => "dashboard",
            Self::Policies => "policies",
            Self::Tasks => "tasks",
            Self::Registers => "registers",
            Self::Reports => "reports",
            Self::Files => "files",
            Self::Admin => "admin",
            Self::Team => "team",
        }
    }
}

impl fmt::Display for Capability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// BulkAction
// ---------------------------------------------------------------------------

/// Operation applied to a selection of team members at once.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "lowercase")]
pub enum BulkAction {
    Invite,
    Deactivate,
    Export,
}

impl BulkAction {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invite => "invite",
            Self::Deactivate => "deactivate",
            Self::Export => "export",
        }
    }
}

impl fmt::Display for BulkAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BulkAction {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "invite" => Ok(Self::Invite),
            "deactivate" => Ok(Self::Deactivate),
            "export" => Ok(Self::Export),
            other => Err(CoreError::UnsupportedAction(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn suspended_members_can_be_reinvited() {
        assert!(MemberStatus::Suspended.can_transition_to(MemberStatus::Pending));
        assert!(!MemberStatus::Active.can_transition_to(MemberStatus::Pending));
    }

    #[test]
    fn suspension_is_reachable_from_every_other_state() {
        for status in [MemberStatus::Active, MemberStatus::Pending] {
            assert!(status.can_transition_to(MemberStatus::Suspended), "{status}");
        }
        assert!(!MemberStatus::Suspended.can_transition_to(MemberStatus::Suspended));
    }

    #[test]
    fn bulk_action_rejects_unknown_names() {
        let err = "archive".parse::<BulkAction>().expect_err("should fail");
        assert!(matches!(err, CoreError::UnsupportedAction(ref name) if name == "archive"));
    }

    #[test]
    fn capability_serializes_lowercase() {
        let json = serde_json::to_string(&Capability::Registers).unwrap();
        assert_eq!(json, "\"registers\"");
    }
}
