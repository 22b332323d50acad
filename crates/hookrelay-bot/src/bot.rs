//! Core bot logic using the Poise framework.

use crate::error::BotResult;
use hookrelay_commands::{create_framework, Data};
use hookrelay_config::Config;
use hookrelay_webhook::{HttpTransport, WebhookTransport};
use serenity::all::{Client, ClientBuilder, GatewayIntents};
use std::sync::Arc;
use tracing::{info, warn};

/// Main bot structure.
///
/// Owns the configuration and webhook transport shared by every invocation.
/// The gateway connection only exists between [`RelayBot::start`] and its
/// return.
pub struct RelayBot {
    config: Arc<Config>,
    transport: Arc<dyn WebhookTransport>,
}

impl RelayBot {
    /// Creates a new bot instance with the reqwest transport.
    pub fn new(config: Config) -> BotResult<Self> {
        config.validate_bot()?;
        let transport = HttpTransport::new()?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Creates a bot instance with a caller-supplied transport.
    pub fn with_transport(config: Config, transport: Arc<dyn WebhookTransport>) -> Self {
        Self {
            config: Arc::new(config),
            transport,
        }
    }

    /// Gateway intents the bot needs. Slash commands arrive as interactions,
    /// so no privileged intents are requested.
    pub const fn intents() -> GatewayIntents {
        GatewayIntents::GUILDS
    }

    /// Command data handed to the framework on connect.
    pub fn data(&self) -> Data {
        Data::new(self.config.clone(), self.transport.clone())
    }

    /// Builds the gateway client. Logging in happens in [`Client::start`].
    pub async fn connect(&self) -> BotResult<Client> {
        let data = self.data();

        let framework = create_framework()
            .setup(move |_ctx, ready, _framework| {
                let user = ready.user.name.clone();
                Box::pin(async move {
                    info!("Logged in as {}", user);
                    Ok(data)
                })
            })
            .build();

        let client = ClientBuilder::new(&self.config.discord.token, Self::intents())
            .framework(framework)
            .await?;

        Ok(client)
    }

    /// Runs the bot until the gateway closes or Ctrl-C is received.
    pub async fn start(&self) -> BotResult<()> {
        let mut client = self.connect().await?;
        let shard_manager = client.shard_manager.clone();

        tokio::spawn(async move {
            match tokio::signal::ctrl_c().await {
                Ok(()) => {
                    info!("Received Ctrl-C, disconnecting");
                    shard_manager.shutdown_all().await;
                }
                Err(e) => warn!("Could not listen for Ctrl-C: {}", e),
            }
        });

        client.start().await?;
        info!("Disconnected from Discord");
        Ok(())
    }
}
