//! Publishes the slash commands to the configured guild and exits.
//!
//! Registration overwrites the guild's command set, so rerunning after a
//! failure is safe.

use anyhow::Context as _;
use hookrelay_bot::register_guild_commands;
use hookrelay_common::init_logging;
use hookrelay_config::{load_dotenv, ConfigLoader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let dotenv = load_dotenv();
    let loader = ConfigLoader::from_env();
    let config = loader
        .load()
        .await
        .with_context(|| format!("Failed to load configuration ({})", loader.path().display()))?;

    init_logging(&config.logging)?;
    dotenv.log();

    info!("Registering commands...");

    match register_guild_commands(&config).await {
        Ok(count) => {
            info!("Registered {} commands", count);
            Ok(())
        }
        Err(e) => {
            error!("Command registration failed: {:?}", e);
            Err(e).context("Command registration failed")
        }
    }
}
