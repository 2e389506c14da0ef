//! Infrastructure implementation of the `ConfigStore` port.

use anyhow::Result;
use std::path::PathBuf;

use crate::application::ports::ConfigStore;
use crate::domain::{ConfigError, EamConfig};

/// Environment variable overriding the config file location.
pub const CONFIG_ENV: &str = "EAMCTL_CONFIG";

/// Production implementation of `ConfigStore` that reads a YAML file on disk.
pub struct YamlConfigStore;

impl ConfigStore for YamlConfigStore {
    fn load(&self) -> Result<EamConfig> {
        let path = self.path()?;
        if !path.exists() {
            return Ok(EamConfig::default());
        }
        let content = std::fs::read_to_string(&path).map_err(|source| ConfigError::Unreadable {
            path: path.display().to_string(),
            source,
        })?;
        if content.trim().is_empty() {
            return Ok(EamConfig::default());
        }
        let config = serde_yaml::from_str(&content).map_err(|e| ConfigError::Invalid {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;
        Ok(config)
    }

    fn path(&self) -> Result<PathBuf> {
        if let Ok(val) = std::env::var(CONFIG_ENV) {
            return Ok(PathBuf::from(val));
        }
        let home = dirs::home_dir().ok_or(ConfigError::NoHome)?;
        Ok(home.join(".eamctl").join("config.yaml"))
    }
}
