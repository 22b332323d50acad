//! Validation of the configuration for each process that consumes it.

use crate::schema::Config;
use hookrelay_common::{ApplicationId, GuildId, RelayError, Result};
use tracing::warn;

/// Everything the command registrar needs, guaranteed present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationTarget {
    /// Bot token used to authenticate against the Discord API.
    pub token: String,
    /// Application the commands belong to.
    pub application_id: ApplicationId,
    /// Guild the commands are published to.
    pub guild_id: GuildId,
}

/// Configuration validator.
pub struct ConfigValidator;

impl ConfigValidator {
    /// Checks that a bot token is present. Tokens without the usual
    /// dot-separated segments are accepted with a warning.
    pub fn validate_token(token: &str) -> Result<()> {
        if token.trim().is_empty() {
            return Err(RelayError::config("Discord token cannot be empty"));
        }

        if !token.contains('.') {
            warn!("Discord token format may be invalid (missing dots)");
        }

        Ok(())
    }
}

impl Config {
    /// Validates the configuration for running the bot.
    ///
    /// A missing webhook URL is not an error here: it is reported to users
    /// on each invocation instead.
    pub fn validate_bot(&self) -> Result<()> {
        ConfigValidator::validate_token(&self.discord.token)?;

        if self.webhook.base_url().is_none() {
            warn!("N8N_WEBHOOK_URL is not set; webhook commands will reply with a configuration error");
        }

        Ok(())
    }

    /// Validates the configuration for command registration.
    pub fn registration_target(&self) -> Result<RegistrationTarget> {
        ConfigValidator::validate_token(&self.discord.token)?;

        let application_id = match self.discord.application_id {
            Some(ApplicationId(0)) | None => {
                return Err(RelayError::config(
                    "Discord application ID (DISCORD_CLIENT_ID) is required",
                ))
            }
            Some(id) => id,
        };

        let guild_id = match self.discord.guild_id {
            Some(GuildId(0)) | None => {
                return Err(RelayError::config(
                    "Discord guild ID (DISCORD_GUILD_ID) is required",
                ))
            }
            Some(id) => id,
        };

        Ok(RegistrationTarget {
            token: self.discord.token.trim().to_string(),
            application_id,
            guild_id,
        })
    }
}
