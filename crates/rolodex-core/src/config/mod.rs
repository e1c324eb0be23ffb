use config::{Config, ConfigBuilder, FileFormat, builder::DefaultState};
use serde::Deserialize;

use crate::error::CoreResult;
use crate::types::{KeySet, SortMode};

/// Name of the optional settings file looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "rolodex.toml";

/// Prefix for environment variable overrides, e.g. `ROLODEX_DIRECTORY__SORT_MODE`.
pub const ENV_PREFIX: &str = "ROLODEX";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub directory: DirectoryConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DirectoryConfig {
    pub sort_mode: SortMode,
    pub key_set: KeySet,
    /// Drop contacts without a phone number before sectioning.
    pub require_phone_number: bool,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

/// Environment source. Nesting uses `__` because keys themselves contain `_`.
fn environment() -> config::Environment {
    config::Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
        .ignore_empty(true)
        .try_parsing(true)
}

impl Settings {
    fn defaults() -> CoreResult<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("directory.sort_mode", SortMode::default().as_str())?
            .set_default("directory.key_set", KeySet::default().as_str())?
            .set_default("directory.require_phone_number", false)?
            .set_default("logging.level", "info")?)
    }

    /// ## Summary
    /// Loads configuration from the optional `rolodex.toml` file and
    /// `ROLODEX_`-prefixed environment variables into a `Settings`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Ok(Self::defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            // Env vars
            .add_source(environment())
            .build()?
            .try_deserialize::<Settings>()?)
    }

    /// ## Summary
    /// Builds a `Settings` from TOML text layered over the defaults.
    ///
    /// ## Errors
    /// Returns an error if the text is not valid TOML or does not deserialize.
    pub fn from_toml_str(toml: &str) -> CoreResult<Self> {
        Ok(Self::defaults()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables, `.env`, and `rolodex.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");
    Ok(settings)
}
