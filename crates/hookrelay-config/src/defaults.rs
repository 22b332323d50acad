//! Default values for every configuration section.

use crate::schema::*;
use hookrelay_common::LoggingConfig;

impl Default for Config {
    fn default() -> Self {
        Self {
            discord: DiscordConfig::default(),
            webhook: WebhookConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for DiscordConfig {
    fn default() -> Self {
        Self {
            token: String::new(),
            application_id: None,
            guild_id: None,
        }
    }
}

impl Default for WebhookConfig {
    fn default() -> Self {
        Self { base_url: None }
    }
}
