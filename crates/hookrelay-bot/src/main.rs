//! Main entry point for the HookRelay bot.

use hookrelay_bot::{BotResult, RelayBot};
use hookrelay_common::init_logging;
use hookrelay_config::{load_dotenv, ConfigLoader};
use tracing::{error, info};

#[tokio::main]
async fn main() -> BotResult<()> {
    let dotenv = load_dotenv();
    let config = ConfigLoader::from_env().load().await?;

    init_logging(&config.logging)?;
    dotenv.log();

    info!("Starting HookRelay");

    let bot = RelayBot::new(config)?;

    if let Err(e) = bot.start().await {
        error!("Bot stopped with error: {}", e);
        return Err(e);
    }

    Ok(())
}
