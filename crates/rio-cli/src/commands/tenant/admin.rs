use rio_core::enums::Plan;
use rio_tenancy::TenantCommand;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::tenant::{TenantIdArgs, TenantPlanArgs};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub async fn handle_suspend(
    args: &TenantIdArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let command = TenantCommand::Suspend {
        tenant_id: args.tenant_id.clone(),
    };
    let event = ctx.tenants.execute(command).await?;
    output(event.tenant(), flags.format)
}

pub async fn handle_plan(
    args: &TenantPlanArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let event = ctx.tenants.execute(plan_command(args)?).await?;
    output(event.tenant(), flags.format)
}

fn plan_command(args: &TenantPlanArgs) -> anyhow::Result<TenantCommand> {
    Ok(TenantCommand::ChangePlan {
        tenant_id: args.tenant_id.clone(),
        plan: parse_enum::<Plan>(&args.plan, "plan")?,
    })
}
