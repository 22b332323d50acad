//! Configuration schema definitions using serde.

use hookrelay_common::{mask_secret, ApplicationId, GuildId, LoggingConfig};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Main configuration structure for HookRelay.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Discord configuration.
    pub discord: DiscordConfig,
    /// Webhook configuration.
    pub webhook: WebhookConfig,
    /// Logging configuration.
    pub logging: LoggingConfig,
}

/// Discord bot configuration.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscordConfig {
    /// Discord bot token.
    pub token: String,
    /// Application ID, required for command registration only.
    pub application_id: Option<ApplicationId>,
    /// Guild the commands are registered in, required for command registration only.
    pub guild_id: Option<GuildId>,
}

impl fmt::Debug for DiscordConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiscordConfig")
            .field("token", &mask_secret(&self.token))
            .field("application_id", &self.application_id)
            .field("guild_id", &self.guild_id)
            .finish()
    }
}

/// n8n webhook configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WebhookConfig {
    /// Base URL of the default webhook. Auxiliary routes are derived from it.
    pub base_url: Option<String>,
}

impl WebhookConfig {
    /// The configured base URL, treating a blank value as absent.
    pub fn base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_base_url_is_absent() {
        let webhook = WebhookConfig {
            base_url: Some("   ".to_string()),
        };
        assert_eq!(webhook.base_url(), None);

        let webhook = WebhookConfig {
            base_url: Some(" https://example.com/webhook ".to_string()),
        };
        assert_eq!(webhook.base_url(), Some("https://example.com/webhook"));
    }

    #[test]
    fn test_debug_masks_token() {
        let discord = DiscordConfig {
            token: "super-secret-token-1234".to_string(),
            application_id: None,
            guild_id: None,
        };
        let rendered = format!("{discord:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("1234"));
    }
}
