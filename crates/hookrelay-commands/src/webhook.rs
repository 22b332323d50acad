//! The slash command behind every route in the route table.

use crate::framework::{Context, Error};
use crate::relay::relay_invocation;
use crate::reply::InteractionReply;
use hookrelay_webhook::find_route;
use tracing::warn;

/// Relays the invocation to the command's n8n webhook.
///
/// Registered once per route; the name and description are replaced by the
/// route table in [`crate::framework::commands`].
#[poise::command(slash_command)]
pub async fn webhook(ctx: Context<'_>) -> Result<(), Error> {
    let poise::Context::Application(app_ctx) = ctx else {
        return Ok(());
    };

    let Some(route) = find_route(&ctx.command().name) else {
        warn!(command = %ctx.command().name, "No webhook route for command");
        return Ok(());
    };

    let data = ctx.data();
    let reply = InteractionReply::new(app_ctx);
    relay_invocation(route, data.webhook_base_url(), data.transport.as_ref(), &reply).await?;

    Ok(())
}
