use rio_core::entities::TenantDraft;
use rio_core::enums::Plan;
use rio_tenancy::TenantCommand;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::tenant::TenantCreateArgs;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

pub async fn handle(
    args: &TenantCreateArgs,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let draft = build_draft(args)?;

    let progress = Progress::spinner(&format!("Creating {}", draft.name));
    let result = ctx.tenants.execute(TenantCommand::Create(draft)).await;
    match result {
        Ok(event) => {
            progress.finish_clear();
            output(event.tenant(), flags.format)
        }
        Err(error) => {
            progress.finish_err("tenant creation failed");
            Err(error.into())
        }
    }
}

fn build_draft(args: &TenantCreateArgs) -> anyhow::Result<TenantDraft> {
    Ok(TenantDraft {
        name: args.name.clone(),
        subdomain: args.subdomain.clone(),
        plan: parse_enum::<Plan>(&args.plan, "plan")?,
        admin_email: args.admin_email.clone(),
        max_users: args.max_users,
        storage_limit: args.storage_limit.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(plan: &str) -> TenantCreateArgs {
        TenantCreateArgs {
            name: "Northside TAFE".into(),
            subdomain: "northside".into(),
            plan: plan.into(),
            admin_email: None,
            max_users: Some(25),
            storage_limit: None,
        }
    }

    #[test]
    fn draft_carries_parsed_plan() {
        let draft = build_draft(&args("Basic")).unwrap();
        assert_eq!(draft.plan, Plan::Basic);
        assert_eq!(draft.max_users, Some(25));
    }

    #[test]
    fn unknown_plan_is_rejected_before_backend() {
        assert!(build_draft(&args("gold")).is_err());
    }
}
