//! One-shot publication of the slash commands to a guild.

use crate::error::{BotError, BotResult};
use hookrelay_commands::{commands, Data, Error};
use hookrelay_common::{mask_secret, CommandDefinition};
use hookrelay_config::Config;
use serenity::all::{ApplicationId, GuildId, Http};
use std::collections::HashSet;
use tracing::info;

/// Registry entries for a set of Poise commands.
pub fn command_definitions(commands: &[poise::Command<Data, Error>]) -> Vec<CommandDefinition> {
    commands
        .iter()
        .map(|command| {
            CommandDefinition::new(
                command.name.clone(),
                command.description.clone().unwrap_or_default(),
            )
        })
        .collect()
}

/// Rejects a command set in which two commands share a name.
pub fn ensure_unique(definitions: &[CommandDefinition]) -> BotResult<()> {
    let mut seen = HashSet::new();
    for definition in definitions {
        if !seen.insert(definition.name.as_str()) {
            return Err(BotError::DuplicateCommand(definition.name.clone()));
        }
    }
    Ok(())
}

/// Publishes every relay command to the configured guild, replacing whatever
/// was registered before. Returns the number of commands published.
///
/// Configuration is validated before any request is made.
pub async fn register_guild_commands(config: &Config) -> BotResult<usize> {
    let target = config.registration_target()?;

    let commands = commands();
    ensure_unique(&command_definitions(&commands))?;

    info!(
        application = %target.application_id,
        guild = %target.guild_id,
        token = %mask_secret(&target.token),
        "Registering {} commands",
        commands.len()
    );

    let http = Http::new(&target.token);
    http.set_application_id(ApplicationId::new(target.application_id.0));

    poise::builtins::register_in_guild(&http, &commands, GuildId::new(target.guild_id.0)).await?;

    info!("Commands registered!");
    Ok(commands.len())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_unique() {
        let unique = vec![
            CommandDefinition::new("verify-data", "a"),
            CommandDefinition::new("top-insurers", "b"),
        ];
        assert!(ensure_unique(&unique).is_ok());

        let duplicated = vec![
            CommandDefinition::new("verify-data", "a"),
            CommandDefinition::new("verify-data", "b"),
        ];
        let err = ensure_unique(&duplicated).unwrap_err();
        assert!(matches!(err, BotError::DuplicateCommand(ref name) if name == "verify-data"));
        assert!(err.is_configuration());
    }

    #[test]
    fn test_definitions_match_route_table() {
        let definitions = command_definitions(&commands());
        let expected: Vec<_> = hookrelay_webhook::ROUTES
            .iter()
            .map(|route| CommandDefinition::new(route.name, route.description))
            .collect();
        assert_eq!(definitions, expected);
    }
}
