//! Application-wide error taxonomy.

/// Common result type for the application.
pub type Result<T> = std::result::Result<T, RelayError>;

/// Application-wide error type.
#[derive(thiserror::Error, Debug)]
pub enum RelayError {
    /// Missing or malformed configuration.
    #[error("Configuration error: {0}")]
    Config(String),

    /// The webhook could not be reached or the request failed in flight.
    #[error("Webhook transport error: {0}")]
    Transport(String),

    /// The webhook answered with a non-success status.
    #[error("Webhook returned HTTP {0}")]
    Status(u16),

    /// The webhook body was not valid JSON.
    #[error("Webhook response decode error: {0}")]
    Decode(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl RelayError {
    /// Shorthand for [`RelayError::Config`].
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Whether this error stems from configuration rather than a runtime fault.
    #[must_use]
    pub const fn is_configuration(&self) -> bool {
        matches!(self, Self::Config(_))
    }

    /// Whether this error belongs to the webhook transport family
    /// (network failure, non-success status or undecodable body).
    #[must_use]
    pub const fn is_transport(&self) -> bool {
        matches!(self, Self::Transport(_) | Self::Status(_) | Self::Decode(_))
    }
}
