use rio_core::enums::Capability;
use rio_core::roles::PermissionSet;
use rio_team::TeamCommand;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::team::{TeamAccessArgs, TeamMemberArgs};
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct PermissionsResponse {
    member_id: String,
    role: String,
    overridden: bool,
    permissions: PermissionSet,
    granted: Vec<Capability>,
}

pub fn handle(args: &TeamAccessArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    if args.grant.is_empty() && args.revoke.is_empty() {
        anyhow::bail!("team access needs at least one --grant or --revoke capability");
    }

    let mut permissions = ctx.team.effective_permissions(&args.member_id)?;
    apply(&mut permissions, &args.grant, true)?;
    apply(&mut permissions, &args.revoke, false)?;

    ctx.team.execute(TeamCommand::UpdateAccess {
        member_id: args.member_id.clone(),
        permissions,
    })?;
    handle_permissions(
        &TeamMemberArgs {
            member_id: args.member_id.clone(),
        },
        ctx,
        flags,
    )
}

pub fn handle_permissions(
    args: &TeamMemberArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let member = ctx
        .team
        .member(&args.member_id)
        .ok_or_else(|| rio_core::CoreError::member_not_found(&args.member_id))?;
    let permissions = member.effective_permissions();

    output(
        &PermissionsResponse {
            member_id: member.id.clone(),
            role: member.role.clone(),
            overridden: member.permissions.is_some(),
            granted: permissions.granted(),
            permissions,
        },
        flags.format,
    )
}

fn apply(permissions: &mut PermissionSet, raw: &[String], granted: bool) -> anyhow::Result<()> {
    for name in raw {
        let capability = parse_enum::<Capability>(name, "capability")?;
        permissions.set(capability, granted);
    }
    Ok(())
}
