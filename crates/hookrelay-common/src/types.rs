//! Common type definitions and newtype wrappers for domain modeling.

use crate::error::RelayError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A Discord application ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ApplicationId(pub u64);

impl fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ApplicationId {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_snowflake(s, "application ID").map(Self)
    }
}

/// A Discord guild ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuildId(pub u64);

impl fmt::Display for GuildId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for GuildId {
    type Err = RelayError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_snowflake(s, "guild ID").map(Self)
    }
}

fn parse_snowflake(s: &str, what: &str) -> Result<u64, RelayError> {
    match s.trim().parse::<u64>() {
        Ok(0) => Err(RelayError::config(format!("{what} must not be zero"))),
        Ok(id) => Ok(id),
        Err(_) => Err(RelayError::config(format!(
            "{what} must be a numeric snowflake, got {s:?}"
        ))),
    }
}

/// A slash command as published to the Discord command registry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommandDefinition {
    /// Command name as typed by users (without the leading slash).
    pub name: String,
    /// Short description shown in the Discord client.
    pub description: String,
}

impl CommandDefinition {
    /// Creates a new command definition.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// Whether a reply is visible to everyone in the channel or only the invoker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Visibility {
    /// Only the invoking user sees the reply.
    Ephemeral,
    /// The reply is posted to the channel.
    Public,
}

impl Visibility {
    /// Returns `true` for [`Visibility::Ephemeral`].
    #[must_use]
    pub const fn is_ephemeral(self) -> bool {
        matches!(self, Self::Ephemeral)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_snowflake_parsing() {
        assert_eq!(
            "123456789012345678".parse::<GuildId>().unwrap(),
            GuildId(123_456_789_012_345_678)
        );
        assert_eq!(
            " 42 ".parse::<ApplicationId>().unwrap(),
            ApplicationId(42)
        );
        assert!("0".parse::<GuildId>().unwrap_err().is_configuration());
        assert!("abc".parse::<ApplicationId>().is_err());
        assert!("".parse::<GuildId>().is_err());
    }

    #[test]
    fn test_visibility() {
        assert!(Visibility::Ephemeral.is_ephemeral());
        assert!(!Visibility::Public.is_ephemeral());
    }
}
