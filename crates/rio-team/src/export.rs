//! Team export document.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use rio_core::entities::TeamMember;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::TeamError;
use crate::filters::MemberFilters;

/// `{exportDate, teamMembers, filters}` as written to
/// `team-export-<YYYY-MM-DD>.json`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct ExportSnapshot {
    pub export_date: DateTime<Utc>,
    pub team_members: Vec<TeamMember>,
    pub filters: MemberFilters,
}

impl ExportSnapshot {
    #[must_use]
    pub const fn new(
        export_date: DateTime<Utc>,
        team_members: Vec<TeamMember>,
        filters: MemberFilters,
    ) -> Self {
        Self {
            export_date,
            team_members,
            filters,
        }
    }

    #[must_use]
    pub fn file_name(&self) -> String {
        format!("team-export-{}.json", self.export_date.format("%Y-%m-%d"))
    }

    /// Write the snapshot as pretty JSON into `dir`, creating it if needed.
    /// An existing export from the same day is overwritten.
    ///
    /// # Errors
    ///
    /// Returns `TeamError::Export` on I/O failure.
    pub fn write_to(&self, dir: &Path) -> Result<PathBuf, TeamError> {
        let path = dir.join(self.file_name());
        let io_err = |source| TeamError::Export {
            path: path.clone(),
            source,
        };

        fs::create_dir_all(dir).map_err(io_err)?;
        let json = serde_json::to_string_pretty(self)?;
        fs::write(&path, json).map_err(io_err)?;

        tracing::info!(path = %path.display(), count = self.team_members.len(), "team export written");
        Ok(path)
    }
}
