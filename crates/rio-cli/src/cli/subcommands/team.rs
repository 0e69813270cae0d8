use clap::{Args, Subcommand};

/// Team directory commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TeamCommands {
    /// List members matching the filters.
    List(TeamFilterArgs),
    /// Search members by name, email, department, or role.
    Search(TeamSearchArgs),
    /// Write the roster to team-export-<date>.json.
    Export(TeamExportArgs),
    /// Apply invite, deactivate, or export to several members.
    Bulk(TeamBulkArgs),
    /// Grant or revoke capabilities for one member.
    Access(TeamAccessArgs),
    /// Show a member's effective permissions.
    Permissions(TeamMemberArgs),
}

#[derive(Clone, Debug, Default, Args)]
pub struct TeamFilterArgs {
    /// Exact department.
    #[arg(long)]
    pub department: Option<String>,
    /// Exact role id.
    #[arg(long)]
    pub role: Option<String>,
    /// active, pending, or suspended
    #[arg(long)]
    pub status: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TeamSearchArgs {
    /// Case-insensitive text to look for.
    pub query: String,
    #[command(flatten)]
    pub filters: TeamFilterArgs,
}

#[derive(Clone, Debug, Args)]
pub struct TeamExportArgs {
    /// Target directory (overrides general.export_dir).
    #[arg(long)]
    pub dir: Option<String>,
    #[command(flatten)]
    pub filters: TeamFilterArgs,
}

#[derive(Clone, Debug, Args)]
pub struct TeamBulkArgs {
    /// invite, deactivate, or export
    pub action: String,
    /// Member ids.
    #[arg(required = true)]
    pub member_ids: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TeamAccessArgs {
    /// Member id.
    pub member_id: String,
    /// Capabilities to grant.
    #[arg(long, value_delimiter = ',')]
    pub grant: Vec<String>,
    /// Capabilities to revoke.
    #[arg(long, value_delimiter = ',')]
    pub revoke: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TeamMemberArgs {
    /// Member id.
    pub member_id: String,
}
