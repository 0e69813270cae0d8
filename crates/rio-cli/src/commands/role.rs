use rio_core::roles::{self, PermissionSet, RoleTemplate};
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RoleCommands;
use crate::cli::subcommands::role::RoleResolveArgs;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TemplateRow {
    id: &'static str,
    name: &'static str,
    description: &'static str,
    grants: String,
}

#[derive(Debug, Serialize)]
struct ResolveResponse {
    role: String,
    template: &'static str,
    fallback: bool,
    permissions: PermissionSet,
}

pub fn handle(action: &RoleCommands, flags: &GlobalFlags) -> anyhow::Result<()> {
    match action {
        RoleCommands::List => handle_list(flags),
        RoleCommands::Resolve(args) => handle_resolve(args, flags),
    }
}

fn handle_list(flags: &GlobalFlags) -> anyhow::Result<()> {
    let rows: Vec<TemplateRow> = roles::templates().iter().map(template_row).collect();
    output(&rows, flags.format)
}

fn handle_resolve(args: &RoleResolveArgs, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&resolve(&args.role), flags.format)
}

fn template_row(template: &RoleTemplate) -> TemplateRow {
    TemplateRow {
        id: template.id,
        name: template.display_name,
        description: template.description,
        grants: template
            .grants
            .iter()
            .map(|cap| cap.as_str())
            .collect::<Vec<_>>()
            .join(","),
    }
}

fn resolve(role: &str) -> ResolveResponse {
    let template = roles::resolve_template(role);
    let fallback = !roles::is_known(role);
    if fallback {
        tracing::debug!(role, fallback = template.id, "unknown role resolved to fallback");
    }
    ResolveResponse {
        role: role.to_string(),
        template: template.id,
        fallback,
        permissions: template.permissions(),
    }
}

#[cfg(test)]
mod tests {
    use rio_core::enums::Capability;

    use super::*;

    #[test]
    fn unknown_role_reports_fallback() {
        let response = resolve("janitor");
        assert!(response.fallback);
        assert_eq!(response.template, roles::FALLBACK_ROLE);
        assert!(response.permissions.allows(Capability::Tasks));
        assert!(!response.permissions.allows(Capability::Admin));
    }

    #[test]
    fn known_role_is_not_a_fallback() {
        let response = resolve("auditor");
        assert!(!response.fallback);
        assert!(!response.permissions.allows(Capability::Tasks));
    }

    #[test]
    fn rows_list_grants_in_order() {
        let rows: Vec<TemplateRow> = roles::templates().iter().map(template_row).collect();
        assert_eq!(rows.len(), 6);
        assert_eq!(rows[4].id, "trainer");
        assert_eq!(rows[4].grants, "dashboard");
    }
}
