use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub async fn dispatch(
    command: Commands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match command {
        Commands::Tenant { action } => commands::tenant::handle(&action, ctx, flags).await,
        Commands::Team { action } => commands::team::handle(&action, ctx, flags),
        Commands::Layout { action } => commands::layout::handle(&action, ctx, flags),
        Commands::Role { .. } | Commands::Schema(_) => {
            unreachable!("role/schema are pre-dispatched in main")
        }
    }
}
