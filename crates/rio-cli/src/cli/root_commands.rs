use clap::{Args, Subcommand};

use crate::cli::subcommands::{LayoutCommands, RoleCommands, TeamCommands, TenantCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Tenants and the active tenant context.
    Tenant {
        #[command(subcommand)]
        action: TenantCommands,
    },
    /// Team directory of the active tenant.
    Team {
        #[command(subcommand)]
        action: TeamCommands,
    },
    /// Role templates and permission resolution.
    Role {
        #[command(subcommand)]
        action: RoleCommands,
    },
    /// Dashboard widget layout.
    Layout {
        #[command(subcommand)]
        action: LayoutCommands,
    },
    /// Print the JSON schema of a document type.
    Schema(SchemaArgs),
}

#[derive(Clone, Debug, Args)]
pub struct SchemaArgs {
    /// tenant, team-member, or team-export
    pub type_name: String,
}
