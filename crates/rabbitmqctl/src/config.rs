//! Client configuration.
//!
//! ```toml
//! rabbitmqctl_path = "/var/vcap/packages/rabbitmq-server/bin/rabbitmqctl"
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Executable name used when no path is configured; resolved through `PATH`.
pub const DEFAULT_RABBITMQCTL: &str = "rabbitmqctl";

/// Configuration for a [`RabbitMQCtl`](crate::RabbitMQCtl) client.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CtlConfig {
    /// Location of the `rabbitmqctl` executable.
    #[serde(default = "default_rabbitmqctl_path")]
    pub rabbitmqctl_path: PathBuf,
}

fn default_rabbitmqctl_path() -> PathBuf {
    PathBuf::from(DEFAULT_RABBITMQCTL)
}

impl Default for CtlConfig {
    fn default() -> Self {
        Self {
            rabbitmqctl_path: default_rabbitmqctl_path(),
        }
    }
}

impl CtlConfig {
    /// Configuration pointing at a specific executable.
    #[must_use]
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            rabbitmqctl_path: path.into(),
        }
    }

    /// Load configuration from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, parsed or validated.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let content =
            std::fs::read_to_string(path.as_ref()).map_err(|source| ConfigError::Read {
                path: path.as_ref().display().to_string(),
                source,
            })?;

        Self::from_toml(&content)
    }

    /// Parse configuration from a TOML string.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML is invalid or fails validation.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the executable path is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rabbitmqctl_path.as_os_str().is_empty() {
            return Err(ConfigError::Invalid(
                "rabbitmqctl_path cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
