//! Daemon configuration.
//!
//! Settings are read from `seerhub.toml` in the working directory, then
//! overridden by environment variables. Every section has a default so the
//! daemon starts with no file at all.

use serde::Deserialize;

const CONFIG_FILE: &str = "seerhub.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    pub logging: LoggingConfig,
    pub integrations: IntegrationsConfig,
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directives handed to the tracing subscriber.
    pub filter: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "seerhubd=info,seerhub_hs_client=info,seerhub_app=info,seerhub_adapter_homeseer=info".to_owned(),
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct IntegrationsConfig {
    /// Whether to set up the HomeSeer integration at startup.
    pub homeseer_enabled: bool,
}

impl Default for IntegrationsConfig {
    fn default() -> Self {
        Self {
            homeseer_enabled: true,
        }
    }
}

impl Config {
    /// Loads configuration from `seerhub.toml`, applies environment
    /// overrides and validates the result.
    ///
    /// A missing file is not an error; defaults are used instead.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] when the file cannot be read or parsed, or
    /// when the resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file(CONFIG_FILE)?;
        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(raw) => Ok(toml::from_str(&raw)?),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(err.into()),
        }
    }

    fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    // Overrides are read through `var`, a lookup keyed by variable name.
    // An unparseable SEERHUB_HOMESEER_ENABLED value is ignored.
    fn apply_overrides(&mut self, var: impl Fn(&str) -> Option<String>) {
        if let Some(enabled) = var("SEERHUB_HOMESEER_ENABLED").and_then(|raw| raw.parse().ok()) {
            self.integrations.homeseer_enabled = enabled;
        }
        if let Some(filter) = var("SEERHUB_LOG") {
            self.logging.filter = filter;
        }
        // RUST_LOG is applied last so it wins over the seerhub-specific variable.
        if let Some(filter) = var("RUST_LOG") {
            self.logging.filter = filter;
        }
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.logging.filter.trim().is_empty() {
            return Err(ConfigError::Validation(
                "logging filter must not be empty".to_owned(),
            ));
        }
        Ok(())
    }
}
