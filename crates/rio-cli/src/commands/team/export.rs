use std::path::PathBuf;

use rio_team::TeamCommand;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::team::TeamExportArgs;
use crate::commands::team::filters_from;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct ExportResponse {
    path: String,
    members: usize,
}

pub fn handle(args: &TeamExportArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.team
        .execute(TeamCommand::SetFilters(filters_from(&args.filters)?))?;
    let snapshot = ctx.team.export_snapshot();

    let dir = export_dir(args.dir.as_deref(), &ctx.config.general.export_dir);
    let path = snapshot.write_to(&dir)?;

    output(
        &ExportResponse {
            path: path.display().to_string(),
            members: snapshot.team_members.len(),
        },
        flags.format,
    )
}

fn export_dir(flag: Option<&str>, configured: &str) -> PathBuf {
    match flag {
        Some(dir) => PathBuf::from(dir),
        None if configured.is_empty() => PathBuf::from("."),
        None => PathBuf::from(configured),
    }
}
