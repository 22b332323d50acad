//! The relay flow shared by every webhook command.
//!
//! One invocation is: acknowledge, resolve the route, call the webhook,
//! normalize the body, edit the reply. Every branch ends in exactly one
//! edit; only failures talking to Discord itself are returned as errors.

use crate::framework::Error;
use async_trait::async_trait;
use hookrelay_common::{RelayError, Visibility};
use hookrelay_webhook::{CommandRoute, WebhookTransport, NOT_CONFIGURED_MESSAGE};
use tracing::{error, info, warn};

/// The reply side of one interaction.
#[async_trait]
pub trait ReplyChannel: Send + Sync {
    /// Sends the deferred acknowledgment.
    async fn acknowledge(&self, visibility: Visibility) -> Result<(), Error>;

    /// Replaces the deferred acknowledgment with the final text.
    async fn complete(&self, content: &str) -> Result<(), Error>;
}

/// Terminal state of one relay invocation.
#[derive(Debug)]
pub enum RelayOutcome {
    /// The webhook answered; holds the normalized reply text.
    Completed(String),
    /// No usable webhook base URL; no request was made.
    NotConfigured(RelayError),
    /// The webhook call failed in transport, status or decoding.
    Failed(RelayError),
}

impl RelayOutcome {
    /// The text shown to the user for this outcome.
    pub fn reply_text<'a>(&'a self, route: &'a CommandRoute) -> &'a str {
        match self {
            Self::Completed(text) => text.as_str(),
            Self::NotConfigured(_) => NOT_CONFIGURED_MESSAGE,
            Self::Failed(RelayError::Status(_)) => route.status_failure,
            Self::Failed(_) => route.transport_failure,
        }
    }

    /// Whether the invocation reached the success state.
    pub const fn is_completed(&self) -> bool {
        matches!(self, Self::Completed(_))
    }
}

/// Runs one invocation of `route` end to end.
pub async fn relay_invocation<R, T>(
    route: &CommandRoute,
    base_url: Option<&str>,
    transport: &T,
    reply: &R,
) -> Result<RelayOutcome, Error>
where
    R: ReplyChannel + ?Sized,
    T: WebhookTransport + ?Sized,
{
    reply.acknowledge(route.visibility).await?;

    let outcome = match route.resolve(base_url) {
        Err(e) => {
            warn!(command = route.name, "Webhook not configured: {}", e);
            RelayOutcome::NotConfigured(e)
        }
        Ok(url) => match transport.fetch(&url).await {
            Ok(response) => {
                info!(command = route.name, "Webhook call succeeded");
                RelayOutcome::Completed(response.display_text())
            }
            Err(e) => {
                error!(command = route.name, url = %url, "Webhook call failed: {}", e);
                RelayOutcome::Failed(e)
            }
        },
    };

    reply.complete(outcome.reply_text(route)).await?;
    Ok(outcome)
}
