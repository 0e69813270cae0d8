pub mod admin;
pub mod create;
pub mod list;
pub mod switch;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TenantCommands;
use crate::context::AppContext;

pub async fn handle(
    action: &TenantCommands,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.load_tenants().await?;

    match action {
        TenantCommands::List => list::handle(ctx, flags),
        TenantCommands::Current => list::handle_current(ctx, flags),
        TenantCommands::Switch(args) => switch::handle(args, ctx, flags).await,
        TenantCommands::Create(args) => create::handle(args, ctx, flags).await,
        TenantCommands::Suspend(args) => admin::handle_suspend(args, ctx, flags).await,
        TenantCommands::Plan(args) => admin::handle_plan(args, ctx, flags).await,
    }
}
