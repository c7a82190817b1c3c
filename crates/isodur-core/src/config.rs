use config::Config;
use serde::Deserialize;

use crate::error::CoreResult;

/// Name of the optional configuration file, resolved relative to the working directory.
pub const CONFIG_FILE: &str = "isodur.toml";

/// Prefix for environment overrides, e.g. `ISODUR_SHIFT__TIMEZONE`.
pub const ENV_PREFIX: &str = "ISODUR";

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub shift: ShiftConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ShiftConfig {
    /// TZID used to interpret wall-clock times that carry no offset.
    pub timezone: String,
}

impl Settings {
    /// ## Summary
    /// Loads configuration from environment variables and `isodur.toml`.
    /// Environment variables take precedence over file values.
    ///
    /// ## Errors
    /// Returns an error if building the configuration or deserializing it fails.
    pub fn load() -> CoreResult<Self> {
        Self::build(config::File::with_name(CONFIG_FILE).required(false))
    }

    /// ## Summary
    /// Builds settings from defaults, the given file source, and the environment.
    ///
    /// ## Errors
    /// Returns an error if a source cannot be read or a value has the wrong type.
    pub fn build<S>(file: S) -> CoreResult<Self>
    where
        S: config::Source + Send + Sync + 'static,
    {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("shift.timezone", "UTC")?
            // TOML file
            .add_source(file)
            // Env
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize::<Settings>()?)
    }
}

/// ## Summary
/// Loads configuration from environment variables and `.env` file.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> CoreResult<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
