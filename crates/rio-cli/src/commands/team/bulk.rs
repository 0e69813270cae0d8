use rio_team::TeamCommand;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::team::TeamBulkArgs;
use crate::context::AppContext;
use crate::output::output;

pub fn handle(args: &TeamBulkArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let command = TeamCommand::bulk_named(&args.action, args.member_ids.clone())?;
    let event = ctx.team.execute(command)?;
    output(&event, flags.format)
}
