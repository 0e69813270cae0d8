use clap::{Args, Subcommand};

/// Role template commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RoleCommands {
    /// List the role templates.
    List,
    /// Resolve a role id to its permissions. Unknown roles get staff access.
    Resolve(RoleResolveArgs),
}

#[derive(Clone, Debug, Args)]
pub struct RoleResolveArgs {
    /// Role id.
    pub role: String,
}
