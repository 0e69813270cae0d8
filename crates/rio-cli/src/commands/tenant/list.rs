use rio_core::entities::Tenant;
use rio_dashboard::DashboardState;
use serde::Serialize;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate};
use crate::context::AppContext;
use crate::output::output;

#[derive(Debug, Serialize)]
struct TenantRow {
    id: String,
    name: String,
    plan: String,
    status: String,
    users: u32,
    storage: String,
    score: u8,
    active: bool,
}

#[derive(Debug, Serialize)]
struct CurrentResponse {
    tenant: Tenant,
    dashboard: Option<DashboardState>,
}

pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let active = ctx.tenants.active_tenant().map(|t| t.id);
    let limit = effective_limit(None, flags.limit, ctx.config.general.default_limit);

    let mut rows: Vec<TenantRow> = ctx
        .tenants
        .list_tenants()
        .into_iter()
        .map(|t| TenantRow {
            active: active.as_deref() == Some(t.id.as_str()),
            plan: t.plan.to_string(),
            status: t.status.to_string(),
            users: t.user_count,
            storage: t.storage_used,
            score: t.compliance_score,
            id: t.id,
            name: t.name,
        })
        .collect();
    truncate(&mut rows, limit);

    output(&rows, flags.format)
}

pub fn handle_current(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tenant = ctx
        .tenants
        .active_tenant()
        .ok_or_else(|| anyhow::anyhow!("no tenants available from the tenant backend"))?;

    output(
        &CurrentResponse {
            tenant,
            dashboard: ctx.refresher.state(),
        },
        flags.format,
    )
}
