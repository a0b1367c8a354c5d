use serde::Serialize;
use txs_gateway::Gateway;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;
use crate::progress::Progress;

#[derive(Debug, Serialize)]
struct PingResponse<'a> {
    ok: bool,
    host: &'a str,
    organization: &'a str,
    organization_id: &'a str,
}

/// Handle `txs ping`.
pub async fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let progress = Progress::spinner(&format!("Contacting {}", ctx.config.api.host));
    let result = ctx.client.ping().await;
    progress.finish(&result, "ping failed");
    result?;

    let organization = ctx.client.session().login().await?;
    output(
        &PingResponse {
            ok: true,
            host: &ctx.config.api.host,
            organization: &organization.slug,
            organization_id: &organization.id,
        },
        flags.format,
    )
}
