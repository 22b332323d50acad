//! Application-wide error types using thiserror.

use hookrelay_common::RelayError;
use poise::serenity_prelude as serenity;

/// Main application error type.
#[derive(thiserror::Error, Debug)]
pub enum BotError {
    /// Configuration, transport or I/O error from the lower layers.
    #[error(transparent)]
    Relay(#[from] RelayError),

    /// Discord/Serenity error.
    #[error("Discord error: {0}")]
    Discord(#[from] serenity::Error),

    /// Two commands share a name.
    #[error("Duplicate command name: {0}")]
    DuplicateCommand(String),
}

impl BotError {
    /// Whether the error is a configuration problem the operator must fix.
    pub fn is_configuration(&self) -> bool {
        matches!(self, Self::Relay(e) if e.is_configuration())
            || matches!(self, Self::DuplicateCommand(_))
    }
}

/// Result type for the bot application.
pub type BotResult<T> = Result<T, BotError>;
