//! Team directory: roster, filters, search, and bulk operations.
//!
//! Queries return members in roster order. Filters and search compose:
//! a search only ever narrows the filtered view.

use chrono::Utc;
use rio_core::CoreError;
use rio_core::entities::TeamMember;
use rio_core::enums::{BulkAction, MemberStatus};
use rio_core::roles::PermissionSet;
use serde::Serialize;

use crate::export::ExportSnapshot;
use crate::filters::MemberFilters;

/// A typed request against the directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TeamCommand {
    SetFilters(MemberFilters),
    ResetFilters,
    Bulk {
        action: BulkAction,
        member_ids: Vec<String>,
    },
    UpdateAccess {
        member_id: String,
        permissions: PermissionSet,
    },
}

impl TeamCommand {
    /// Build a bulk command from an action name.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::UnsupportedAction` for unknown action names.
    pub fn bulk_named(action: &str, member_ids: Vec<String>) -> Result<Self, CoreError> {
        Ok(Self::Bulk {
            action: parse_bulk_action(action)?,
            member_ids,
        })
    }
}

fn parse_bulk_action(action: &str) -> Result<BulkAction, CoreError> {
    action.parse::<BulkAction>().inspect_err(|_| {
        tracing::warn!(action, "unknown bulk action ignored");
    })
}

/// What a [`TeamCommand`] did. Serializes as its payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TeamEvent {
    FiltersChanged(MemberFilters),
    Bulk(BulkOutcome),
    AccessUpdated(TeamMember),
}

/// Result of a bulk action.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BulkOutcome {
    pub action: BulkAction,
    /// Members the action changed or included, in request order.
    pub affected: Vec<String>,
    /// Members left as they were because the action did not apply.
    pub skipped: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<ExportSnapshot>,
}

#[derive(Debug, Clone, Default)]
pub struct TeamDirectory {
    members: Vec<TeamMember>,
    filters: MemberFilters,
}

impl TeamDirectory {
    #[must_use]
    pub fn new(members: Vec<TeamMember>) -> Self {
        Self {
            members,
            filters: MemberFilters::default(),
        }
    }

    /// Every member, roster order, ignoring filters.
    #[must_use]
    pub fn members(&self) -> &[TeamMember] {
        &self.members
    }

    #[must_use]
    pub fn member(&self, member_id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|m| m.id == member_id)
    }

    #[must_use]
    pub const fn filters(&self) -> &MemberFilters {
        &self.filters
    }

    /// Replace the whole filter set. Fields left unset match everything.
    pub fn set_filters(&mut self, filters: MemberFilters) {
        tracing::debug!(?filters, "team filters set");
        self.filters = filters;
    }

    pub fn reset_filters(&mut self) {
        self.filters = MemberFilters::default();
    }

    /// Members matching every active filter.
    #[must_use]
    pub fn apply_filters(&self) -> Vec<&TeamMember> {
        self.members
            .iter()
            .filter(|m| self.filters.matches(m))
            .collect()
    }

    /// Case-insensitive substring search over name, email, department and
    /// role, within the filtered view. An empty query is the filtered view;
    /// whitespace in a query is matched literally.
    #[must_use]
    pub fn search(&self, query: &str) -> Vec<&TeamMember> {
        if query.is_empty() {
            return self.apply_filters();
        }
        let needle = query.to_lowercase();
        self.members
            .iter()
            .filter(|m| self.filters.matches(m) && m.matches_lowercase(&needle))
            .collect()
    }

    /// Apply `action` to the selected members.
    ///
    /// - invite: members that are not active become pending
    /// - deactivate: members that may be suspended are suspended
    /// - export: snapshot of the selection, nothing mutated
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for the first unknown id. Ids are all
    /// checked before any member changes. Repeated ids count once.
    pub fn bulk_action(
        &mut self,
        action: BulkAction,
        member_ids: &[String],
    ) -> Result<BulkOutcome, CoreError> {
        let mut indices = Vec::with_capacity(member_ids.len());
        for id in member_ids {
            let index = self.index_of(id)?;
            if !indices.contains(&index) {
                indices.push(index);
            }
        }

        let mut outcome = BulkOutcome {
            action,
            affected: Vec::new(),
            skipped: Vec::new(),
            export: None,
        };

        match action {
            BulkAction::Invite => {
                for index in indices {
                    let member = &mut self.members[index];
                    if member.status == MemberStatus::Active {
                        outcome.skipped.push(member.id.clone());
                    } else {
                        member.status = MemberStatus::Pending;
                        outcome.affected.push(member.id.clone());
                    }
                }
            }
            BulkAction::Deactivate => {
                for index in indices {
                    let member = &mut self.members[index];
                    if member.status.can_transition_to(MemberStatus::Suspended) {
                        member.status = MemberStatus::Suspended;
                        outcome.affected.push(member.id.clone());
                    } else {
                        outcome.skipped.push(member.id.clone());
                    }
                }
            }
            BulkAction::Export => {
                let selected: Vec<TeamMember> =
                    indices.iter().map(|&i| self.members[i].clone()).collect();
                outcome.affected = selected.iter().map(|m| m.id.clone()).collect();
                outcome.export = Some(ExportSnapshot::new(
                    Utc::now(),
                    selected,
                    self.filters.clone(),
                ));
            }
        }

        tracing::info!(
            %action,
            affected = outcome.affected.len(),
            skipped = outcome.skipped.len(),
            "bulk action applied"
        );
        Ok(outcome)
    }

    /// Set a per-member access override.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for unknown ids.
    pub fn update_access(
        &mut self,
        member_id: &str,
        permissions: PermissionSet,
    ) -> Result<&TeamMember, CoreError> {
        let index = self.index_of(member_id)?;
        let member = &mut self.members[index];
        member.permissions = Some(permissions);
        tracing::info!(member_id, "member access updated");
        Ok(member)
    }

    /// The member's override, or their role template's grants.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` for unknown ids.
    pub fn effective_permissions(&self, member_id: &str) -> Result<PermissionSet, CoreError> {
        self.member(member_id)
            .map(TeamMember::effective_permissions)
            .ok_or_else(|| CoreError::member_not_found(member_id))
    }

    /// The whole roster with the current filters, stamped now.
    #[must_use]
    pub fn export_snapshot(&self) -> ExportSnapshot {
        ExportSnapshot::new(Utc::now(), self.members.clone(), self.filters.clone())
    }

    /// Dispatch a typed command.
    ///
    /// # Errors
    ///
    /// Propagates the error of the underlying operation.
    pub fn execute(&mut self, command: TeamCommand) -> Result<TeamEvent, CoreError> {
        match command {
            TeamCommand::SetFilters(filters) => {
                self.set_filters(filters);
                Ok(TeamEvent::FiltersChanged(self.filters.clone()))
            }
            TeamCommand::ResetFilters => {
                self.reset_filters();
                Ok(TeamEvent::FiltersChanged(self.filters.clone()))
            }
            TeamCommand::Bulk { action, member_ids } => {
                self.bulk_action(action, &member_ids).map(TeamEvent::Bulk)
            }
            TeamCommand::UpdateAccess {
                member_id,
                permissions,
            } => self
                .update_access(&member_id, permissions)
                .map(|m| TeamEvent::AccessUpdated(m.clone())),
        }
    }

    fn index_of(&self, member_id: &str) -> Result<usize, CoreError> {
        self.members
            .iter()
            .position(|m| m.id == member_id)
            .ok_or_else(|| CoreError::member_not_found(member_id))
    }
}
