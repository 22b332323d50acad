//! Poise framework setup and command registration logic.

use hookrelay_config::Config;
use hookrelay_webhook::{WebhookTransport, ROUTES};
use std::sync::Arc;
use tracing::{debug, error};

/// Application data accessible in all commands.
pub struct Data {
    /// Application configuration.
    pub config: Arc<Config>,
    /// Transport used for every webhook call.
    pub transport: Arc<dyn WebhookTransport>,
}

impl Data {
    /// Creates the shared command data.
    pub fn new(config: Arc<Config>, transport: Arc<dyn WebhookTransport>) -> Self {
        Self { config, transport }
    }

    /// The configured webhook base URL, `None` when unset or blank.
    pub fn webhook_base_url(&self) -> Option<&str> {
        self.config.webhook.base_url()
    }
}

/// Application error type for commands.
pub type Error = Box<dyn std::error::Error + Send + Sync>;

/// Command context type.
pub type Context<'a> = poise::Context<'a, Data, Error>;

/// Builds one slash command per route, all backed by the relay handler.
pub fn commands() -> Vec<poise::Command<Data, Error>> {
    ROUTES
        .iter()
        .map(|route| {
            let mut command = crate::webhook::webhook();
            command.name = route.name.to_string();
            command.qualified_name = route.name.to_string();
            command.identifying_name = route.name.to_string();
            command.description = Some(route.description.to_string());
            command
        })
        .collect()
}

/// Creates a new Poise framework.
pub fn create_framework() -> poise::FrameworkBuilder<Data, Error> {
    poise::Framework::builder().options(poise::FrameworkOptions {
        commands: commands(),
        on_error: |error| Box::pin(on_error(error)),
        pre_command: |ctx| {
            Box::pin(async move {
                debug!(
                    command = %ctx.command().qualified_name,
                    user = %ctx.author().id,
                    "Received command"
                );
            })
        },
        ..Default::default()
    })
}

async fn on_error(error: poise::FrameworkError<'_, Data, Error>) {
    match error {
        poise::FrameworkError::Setup { error, .. } => {
            error!("Failed to set up framework: {}", error);
        }
        poise::FrameworkError::Command { error, ctx, .. } => {
            error!(command = %ctx.command().qualified_name, "Command failed: {}", error);
        }
        other => {
            if let Err(e) = poise::builtins::on_error(other).await {
                error!("Error while handling error: {}", e);
            }
        }
    }
}
