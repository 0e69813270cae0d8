use clap::{Args, Subcommand};

/// Tenant commands.
#[derive(Clone, Debug, Subcommand)]
pub enum TenantCommands {
    /// List known tenants.
    List,
    /// Show the active tenant.
    Current,
    /// Make a tenant the active one.
    Switch(TenantSwitchArgs),
    /// Provision a new tenant. It is not activated.
    Create(TenantCreateArgs),
    /// Suspend a tenant.
    Suspend(TenantIdArgs),
    /// Change a tenant's plan.
    Plan(TenantPlanArgs),
}

#[derive(Clone, Debug, Args)]
pub struct TenantSwitchArgs {
    /// Tenant id.
    pub tenant_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct TenantIdArgs {
    /// Tenant id.
    pub tenant_id: String,
}

#[derive(Clone, Debug, Args)]
pub struct TenantCreateArgs {
    /// Organization name.
    pub name: String,
    /// Subdomain; becomes the tenant id.
    #[arg(long)]
    pub subdomain: String,
    /// trial, basic, professional, or enterprise
    #[arg(long, default_value = "trial")]
    pub plan: String,
    /// Administrator email.
    #[arg(long)]
    pub admin_email: Option<String>,
    /// Seat limit.
    #[arg(long)]
    pub max_users: Option<u32>,
    /// Storage quota, e.g. 10GB.
    #[arg(long)]
    pub storage_limit: Option<String>,
}

#[derive(Clone, Debug, Args)]
pub struct TenantPlanArgs {
    /// Tenant id.
    pub tenant_id: String,
    /// trial, basic, professional, or enterprise
    pub plan: String,
}
