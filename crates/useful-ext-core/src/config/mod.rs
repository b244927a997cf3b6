use anyhow::Result;
use config::{Config, ConfigBuilder, builder::DefaultState};
use serde::Deserialize;

use crate::types::ComparisonMode;

#[cfg(test)]
mod tests;

/// Name of the optional configuration file, looked up relative to the working directory.
pub const CONFIG_FILE_NAME: &str = "useful-ext.toml";

/// Prefix shared by every environment variable read into [`Settings`].
pub const ENV_PREFIX: &str = "USEFUL_EXT";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub text: TextSettings,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TextSettings {
    pub comparison: ComparisonMode,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
        }
    }
}

impl Settings {
    /// ## Summary
    /// Loads configuration from `useful-ext.toml` and `USEFUL_EXT_*` environment variables.
    /// Environment variables take precedence over file values.
    ///
    /// Nested keys use a double underscore, e.g. `USEFUL_EXT_TEXT__COMPARISON=ordinal`.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> Result<Self> {
        Ok(with_defaults()?
            // TOML file
            .add_source(config::File::with_name(CONFIG_FILE_NAME).required(false))
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Self>()?)
    }

    /// ## Summary
    /// Layers a TOML document over the built-in defaults.
    ///
    /// ## Errors
    /// Returns an error if the document is not valid TOML or does not deserialize.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        Ok(with_defaults()?
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()?
            .try_deserialize::<Self>()?)
    }
}

fn with_defaults() -> Result<ConfigBuilder<DefaultState>> {
    Ok(Config::builder()
        .set_default("text.comparison", ComparisonMode::default().as_str())?
        .set_default("logging.level", LoggingConfig::default().level)?)
}

/// ## Summary
/// Loads configuration from environment variables, a `.env` file and `useful-ext.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    dotenvy::dotenv().ok();

    let settings = Settings::load()?;
    tracing::debug!(settings = ?settings, "Configuration loaded");

    Ok(settings)
}
