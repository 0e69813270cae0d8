//! Role templates and permission resolution.
//!
//! The six templates are process-wide constants. Resolving a role that is not
//! in the table yields the `staff` grants; that fallback is policy, not an
//! error path.

use std::collections::BTreeMap;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::Capability;

/// Role id used when a member's role is unknown.
pub const FALLBACK_ROLE: &str = "staff";

/// A full capability → granted mapping. Always carries all capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct PermissionSet(BTreeMap<Capability, bool>);

impl PermissionSet {
    /// Build a set granting exactly `grants`; everything else is denied.
    #[must_use]
    pub fn from_grants(grants: &[Capability]) -> Self {
        Self(
            Capability::ALL
                .iter()
                .map(|cap| (*cap, grants.contains(cap)))
                .collect(),
        )
    }

    /// A set with every capability denied.
    #[must_use]
    pub fn none() -> Self {
        Self::from_grants(&[])
    }

    #[must_use]
    pub fn allows(&self, capability: Capability) -> bool {
        self.0.get(&capability).copied().unwrap_or(false)
    }

    pub fn set(&mut self, capability: Capability, granted: bool) {
        self.0.insert(capability, granted);
    }

    /// Granted capabilities in display order.
    #[must_use]
    pub fn granted(&self) -> Vec<Capability> {
        Capability::ALL
            .into_iter()
            .filter(|cap| self.allows(*cap))
            .collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Capability, bool)> + '_ {
        self.0.iter().map(|(cap, granted)| (*cap, *granted))
    }
}

/// A named, predefined bundle of capability grants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RoleTemplate {
    pub id: &'static str,
    pub display_name: &'static str,
    pub description: &'static str,
    pub grants: &'static [Capability],
}

impl RoleTemplate {
    #[must_use]
    pub fn permissions(&self) -> PermissionSet {
        PermissionSet::from_grants(self.grants)
    }
}

use Capability::{Admin, Dashboard, Files, Policies, Registers, Reports, Tasks, Team};

static TEMPLATES: [RoleTemplate; 6] = [
    RoleTemplate {
        id: "compliance-admin",
        display_name: "Compliance Administrator",
        description: "Full system access with administrative privileges",
        grants: &[Dashboard, Policies, Tasks, Registers, Reports, Files, Admin, Team],
    },
    RoleTemplate {
        id: "manager",
        display_name: "Department Manager",
        description: "Department-level management access",
        grants: &[Dashboard, Policies, Tasks, Registers, Reports, Files],
    },
    RoleTemplate {
        id: "auditor",
        display_name: "Compliance Auditor",
        description: "Read-only access for audit purposes",
        grants: &[Dashboard, Policies, Registers, Reports, Files],
    },
    RoleTemplate {
        id: "staff",
        display_name: "Staff Member",
        description: "Basic staff access for daily tasks",
        grants: &[Dashboard, Policies, Tasks],
    },
    RoleTemplate {
        id: "trainer",
        display_name: "Trainer",
        description: "Limited access for training purposes",
        grants: &[Dashboard],
    },
    RoleTemplate {
        id: "viewer",
        display_name: "Viewer",
        description: "Read-only access for viewing reports",
        grants: &[Dashboard, Policies, Registers, Reports],
    },
];

/// All role templates in table order.
#[must_use]
pub fn templates() -> &'static [RoleTemplate] {
    &TEMPLATES
}

/// Exact template lookup. `None` for roles outside the table.
#[must_use]
pub fn template(role: &str) -> Option<&'static RoleTemplate> {
    TEMPLATES.iter().find(|t| t.id == role)
}

#[must_use]
pub fn is_known(role: &str) -> bool {
    template(role).is_some()
}

/// Template lookup with the staff fallback applied.
#[must_use]
pub fn resolve_template(role: &str) -> &'static RoleTemplate {
    template(role).unwrap_or(&TEMPLATES[3])
}

/// Resolve a role id to its capability set.
#[must_use]
pub fn resolve(role: &str) -> PermissionSet {
    resolve_template(role).permissions()
}
