pub mod access;
pub mod bulk;
pub mod export;
pub mod list;

use rio_core::enums::MemberStatus;
use rio_team::MemberFilters;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::TeamCommands;
use crate::cli::subcommands::team::TeamFilterArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;

pub fn handle(action: &TeamCommands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        TeamCommands::List(args) => list::handle(args, ctx, flags),
        TeamCommands::Search(args) => list::handle_search(args, ctx, flags),
        TeamCommands::Export(args) => export::handle(args, ctx, flags),
        TeamCommands::Bulk(args) => bulk::handle(args, ctx, flags),
        TeamCommands::Access(args) => access::handle(args, ctx, flags),
        TeamCommands::Permissions(args) => access::handle_permissions(args, ctx, flags),
    }
}

/// Turn filter flags into a filter set, validating the status value.
pub fn filters_from(args: &TeamFilterArgs) -> anyhow::Result<MemberFilters> {
    let mut builder = MemberFilters::builder();
    if let Some(department) = &args.department {
        builder = builder.department(department.clone());
    }
    if let Some(role) = &args.role {
        builder = builder.role(role.clone());
    }
    if let Some(status) = &args.status {
        builder = builder.status(parse_enum::<MemberStatus>(status, "status")?);
    }
    Ok(builder.build())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_flags_map_onto_filter_set() {
        let args = TeamFilterArgs {
            department: Some("academic".into()),
            role: None,
            status: Some("active".into()),
        };
        let filters = filters_from(&args).unwrap();
        assert_eq!(filters.department.as_deref(), Some("academic"));
        assert_eq!(filters.role, None);
        assert_eq!(filters.status, Some(MemberStatus::Active));
    }

    #[test]
    fn bad_status_flag_is_an_error() {
        let args = TeamFilterArgs {
            status: Some("retired".into()),
            ..TeamFilterArgs::default()
        };
        assert!(filters_from(&args).is_err());
    }

    #[test]
    fn no_flags_means_no_filters() {
        assert!(filters_from(&TeamFilterArgs::default()).unwrap().is_empty());
    }
}
