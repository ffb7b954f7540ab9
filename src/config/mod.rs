//! Application configuration
//!
//! Loading, saving, and validation of the spin settings and the
//! saved-list directory override.

use std::fs;
use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::chooser::DEFAULT_STEPS;
use crate::store::storage::ListStorage;
use crate::{Result, SpinPickError, APP_NAME, CONFIG_FILE};

/// User-adjustable application settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Number of decoy reveals before the final draw
    pub spin_steps: usize,
    /// Base delay between reveals, in milliseconds
    pub spin_tick_ms: u64,
    /// Override for the saved-list directory; platform data dir when unset
    pub save_dir: Option<PathBuf>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            spin_steps: DEFAULT_STEPS,
            spin_tick_ms: 100,
            save_dir: None,
        }
    }
}

impl AppConfig {
    /// Validate the configuration parameters
    pub fn validate(&self) -> Result<()> {
        if self.spin_steps == 0 || self.spin_steps > 50 {
            return Err(SpinPickError::Config(format!(
                "spin_steps must be between 1 and 50 (got {})",
                self.spin_steps
            )));
        }

        if self.spin_tick_ms < 20 || self.spin_tick_ms > 1000 {
            return Err(SpinPickError::Config(format!(
                "spin_tick_ms must be between 20 and 1000 (got {})",
                self.spin_tick_ms
            )));
        }

        Ok(())
    }

    /// Base reveal delay as a Duration
    pub fn spin_tick(&self) -> Duration {
        Duration::from_millis(self.spin_tick_ms)
    }

    /// Storage manager honoring the save_dir override
    pub fn list_storage(&self) -> Result<ListStorage> {
        match &self.save_dir {
            Some(dir) => Ok(ListStorage::with_dir(dir.clone())),
            None => ListStorage::new(),
        }
    }

    /// Load configuration from the standard config file location.
    /// Returns default configuration if the file doesn't exist.
    pub fn load() -> Result<Self> {
        let config_path = Self::config_file_path()?;

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(|e| {
            SpinPickError::Config(format!(
                "Failed to read config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        let config: Self = toml::from_str(&content).map_err(|e| {
            SpinPickError::Config(format!(
                "Failed to parse config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        config.validate()?;

        Ok(config)
    }

    /// Save configuration to the standard config file location
    pub fn save(&self) -> Result<()> {
        self.validate()?;

        let config_path = Self::config_file_path()?;

        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                SpinPickError::Config(format!(
                    "Failed to create config directory {}: {}",
                    parent.display(),
                    e
                ))
            })?;
        }

        let content = toml::to_string_pretty(self)?;

        fs::write(&config_path, content).map_err(|e| {
            SpinPickError::Config(format!(
                "Failed to write config file {}: {}",
                config_path.display(),
                e
            ))
        })?;

        Ok(())
    }

    /// Get the standard configuration file path,
    /// `$CONFIG_HOME/spinpick/spinpick.toml` or the platform equivalent
    pub fn config_file_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or_else(|| {
            SpinPickError::Config("Unable to determine config directory".to_string())
        })?;

        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let config = AppConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.spin_steps, 10);
        assert_eq!(config.spin_tick(), Duration::from_millis(100));
    }

    #[test]
    fn test_validate_bounds() {
        let mut config = AppConfig::default();

        config.spin_steps = 0;
        assert!(config.validate().is_err());
        config.spin_steps = 51;
        assert!(config.validate().is_err());
        config.spin_steps = 10;

        config.spin_tick_ms = 5;
        assert!(config.validate().is_err());
        config.spin_tick_ms = 2000;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = AppConfig {
            spin_steps: 20,
            spin_tick_ms: 50,
            save_dir: Some(PathBuf::from("/tmp/lists")),
        };

        let toml_str = toml::to_string(&config).expect("Failed to serialize to TOML");
        let restored: AppConfig = toml::from_str(&toml_str).expect("Failed to parse TOML");

        assert_eq!(restored.spin_steps, 20);
        assert_eq!(restored.spin_tick_ms, 50);
        assert_eq!(restored.save_dir, Some(PathBuf::from("/tmp/lists")));
    }

    #[test]
    fn test_config_file_path() {
        let path = AppConfig::config_file_path().unwrap();
        assert!(path.to_string_lossy().contains("spinpick"));
        assert!(path.to_string_lossy().contains("spinpick.toml"));
    }

    #[test]
    fn test_list_storage_honors_override() {
        let config = AppConfig {
            save_dir: Some(PathBuf::from("/tmp/custom-lists")),
            ..AppConfig::default()
        };
        let storage = config.list_storage().unwrap();
        assert_eq!(storage.dir(), PathBuf::from("/tmp/custom-lists").as_path());
    }
}
