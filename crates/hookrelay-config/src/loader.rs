//! Configuration loading from a TOML file, `.env` and the process environment.

use crate::schema::Config;
use hookrelay_common::{LogFormat, RelayError, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Environment variable naming an explicit configuration file.
pub const CONFIG_PATH_VAR: &str = "HOOKRELAY_CONFIG";
/// Configuration file used when [`CONFIG_PATH_VAR`] is unset.
pub const DEFAULT_CONFIG_PATH: &str = "hookrelay.toml";

/// Bot token.
pub const DISCORD_TOKEN_VAR: &str = "DISCORD_TOKEN";
/// Application (client) ID.
pub const DISCORD_CLIENT_ID_VAR: &str = "DISCORD_CLIENT_ID";
/// Guild ID for command registration.
pub const DISCORD_GUILD_ID_VAR: &str = "DISCORD_GUILD_ID";
/// Base URL of the n8n webhook.
pub const WEBHOOK_URL_VAR: &str = "N8N_WEBHOOK_URL";
/// Log output format (`plain` or `json`).
pub const LOG_FORMAT_VAR: &str = "LOG_FORMAT";
/// Log level, same syntax as `RUST_LOG`.
pub const LOG_LEVEL_VAR: &str = "LOG_LEVEL";

/// Configuration loader.
pub struct ConfigLoader {
    path: PathBuf,
    required: bool,
}

impl ConfigLoader {
    /// Creates a loader for an explicit file. A missing file is an error.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            required: true,
        }
    }

    /// Creates a loader for the file named by `HOOKRELAY_CONFIG`, or the
    /// optional `hookrelay.toml` in the working directory.
    pub fn from_env() -> Self {
        match std::env::var(CONFIG_PATH_VAR) {
            Ok(path) if !path.trim().is_empty() => Self::new(path),
            _ => Self {
                path: PathBuf::from(DEFAULT_CONFIG_PATH),
                required: false,
            },
        }
    }

    /// Path this loader reads from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads the file layer, then applies process environment overrides.
    pub async fn load(&self) -> Result<Config> {
        let mut config = self.load_file().await?;
        apply_env_overrides(&mut config, |key| std::env::var(key).ok())?;
        Ok(config)
    }

    /// Loads only the file layer, falling back to defaults for an optional
    /// file that does not exist.
    pub async fn load_file(&self) -> Result<Config> {
        match tokio::fs::read_to_string(&self.path).await {
            Ok(contents) => {
                debug!("Loaded configuration file {}", self.path.display());
                parse_toml(&contents)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound && !self.required => {
                debug!(
                    "No configuration file at {}, using defaults",
                    self.path.display()
                );
                Ok(Config::default())
            }
            Err(e) => Err(e.into()),
        }
    }
}

/// Result of reading a `.env` file.
///
/// Returned rather than logged because `.env` is read before the subscriber
/// exists; call [`DotenvStatus::log`] once logging is initialised.
#[derive(Debug)]
pub enum DotenvStatus {
    /// Variables were loaded from this file.
    Loaded(PathBuf),
    /// No `.env` file was found.
    NotFound,
    /// The file exists but could not be read or parsed. Variables after the
    /// offending line are not loaded.
    Failed(String),
}

impl DotenvStatus {
    fn from_result(result: std::result::Result<PathBuf, dotenvy::Error>) -> Self {
        match result {
            Ok(path) => Self::Loaded(path),
            Err(e) if e.not_found() => Self::NotFound,
            Err(e) => Self::Failed(e.to_string()),
        }
    }

    /// Emits the outcome through `tracing`.
    pub fn log(&self) {
        match self {
            Self::Loaded(path) => debug!("Loaded environment from {}", path.display()),
            Self::NotFound => debug!("No .env file found"),
            Self::Failed(e) => warn!("Ignoring unreadable .env file: {}", e),
        }
    }

    /// Whether a `.env` file existed but was rejected.
    pub const fn is_failed(&self) -> bool {
        matches!(self, Self::Failed(_))
    }
}

/// Loads a `.env` file from the working directory or any parent into the
/// process environment. Variables already set are left untouched.
pub fn load_dotenv() -> DotenvStatus {
    DotenvStatus::from_result(dotenvy::dotenv())
}

/// Loads a specific `.env` file into the process environment.
pub fn load_dotenv_from(path: impl AsRef<Path>) -> DotenvStatus {
    let path = path.as_ref();
    DotenvStatus::from_result(dotenvy::from_path(path).map(|()| path.to_path_buf()))
}

/// Parses a TOML configuration document.
pub fn parse_toml(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| RelayError::config(format!("Invalid TOML: {e}")))
}

/// Applies environment overrides on top of `config`.
///
/// `lookup` maps a variable name to its value; blank values count as unset,
/// except for `N8N_WEBHOOK_URL` where a blank value explicitly clears the URL.
pub fn apply_env_overrides<F>(config: &mut Config, lookup: F) -> Result<()>
where
    F: Fn(&str) -> Option<String>,
{
    let non_blank = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

    if let Some(token) = non_blank(DISCORD_TOKEN_VAR) {
        config.discord.token = token.trim().to_string();
    }

    if let Some(id) = non_blank(DISCORD_CLIENT_ID_VAR) {
        config.discord.application_id = Some(id.parse()?);
    }

    if let Some(id) = non_blank(DISCORD_GUILD_ID_VAR) {
        config.discord.guild_id = Some(id.parse()?);
    }

    if let Some(url) = lookup(WEBHOOK_URL_VAR) {
        let url = url.trim();
        config.webhook.base_url = (!url.is_empty()).then(|| url.to_string());
    }

    if let Some(level) = non_blank(LOG_LEVEL_VAR) {
        config.logging.level = level.trim().to_string();
    }

    if let Some(format) = non_blank(LOG_FORMAT_VAR) {
        config.logging.format = LogFormat::parse(&format).ok_or_else(|| {
            RelayError::config(format!("{LOG_FORMAT_VAR} must be 'plain' or 'json', got {format:?}"))
        })?;
    }

    Ok(())
}
