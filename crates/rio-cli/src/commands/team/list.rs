use rio_core::entities::TeamMember;
use rio_team::TeamCommand;
use serde::Serialize;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::cli::subcommands::team::{TeamFilterArgs, TeamSearchArgs};
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::commands::team::filters_from;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct MemberRow<'a> {
    id: &'a str,
    name: &'a str,
    email: &'a str,
    role: &'a str,
    department: &'a str,
    status: String,
    tasks: String,
    overdue: u32,
    last_active: String,
}

impl<'a> From<&'a TeamMember> for MemberRow<'a> {
    fn from(member: &'a TeamMember) -> Self {
        let stats = member.task_stats;
        Self {
            id: &member.id,
            name: &member.name,
            email: &member.email,
            role: &member.role,
            department: &member.department,
            status: member.status.to_string(),
            tasks: format!("{}/{}", stats.completed, stats.total),
            overdue: stats.overdue,
            last_active: member
                .last_active_at
                .map_or_else(|| "never".to_string(), |at| at.format("%Y-%m-%d %H:%M").to_string()),
        }
    }
}

pub fn handle(args: &TeamFilterArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    ctx.team.execute(TeamCommand::SetFilters(filters_from(args)?))?;
    let members = ctx.team.apply_filters();
    render(members, ctx.config.general.default_limit, flags)
}

pub fn handle_search(
    args: &TeamSearchArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    ctx.team
        .execute(TeamCommand::SetFilters(filters_from(&args.filters)?))?;
    let members = ctx.team.search(&args.query);
    render(members, ctx.config.general.default_limit, flags)
}

fn render(
    mut members: Vec<&TeamMember>,
    default_limit: u32,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    truncate(&mut members, effective_limit(None, flags.limit, default_limit));

    // nested task stats read poorly as table cells
    if flags.format == OutputFormat::Table {
        let rows: Vec<MemberRow<'_>> = members.into_iter().map(MemberRow::from).collect();
        output(&rows, flags.format)
    } else {
        output(&members, flags.format)
    }
}
