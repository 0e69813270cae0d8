use rio_core::entities::Tenant;
use rio_dashboard::DashboardState;
use rio_tenancy::TenantCommand;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::tenant::TenantSwitchArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct SwitchResponse {
    switched: bool,
    previous: Option<String>,
    tenant: Tenant,
    dashboard: Option<DashboardState>,
}

pub async fn handle(
    args: &TenantSwitchArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let previous = ctx.tenants.active_tenant().map(|t| t.id);

    let progress = Progress::spinner(&format!("Switching to {}", args.tenant_id));
    let command = TenantCommand::Switch {
        tenant_id: args.tenant_id.clone(),
    };
    let tenant = match ctx.tenants.execute(command).await {
        Ok(event) => {
            progress.finish_clear();
            event.tenant().clone()
        }
        Err(error) => {
            progress.finish_err("switch failed");
            return Err(error.into());
        }
    };

    output(
        &SwitchResponse {
            switched: previous.as_deref() != Some(tenant.id.as_str()),
            previous,
            tenant,
            dashboard: ctx.refresher.state(),
        },
        flags.format,
    )
}
