//! The fontsnip configuration file.
//!
//! Lives at `~/.config/fontsnip/config.yaml` (XDG convention on all
//! platforms except Windows, which uses the platform config dir).

use crate::error::ConfigError;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable consulted before the config file for the
/// webfonts API key.
pub const API_KEY_ENV_VAR: &str = "FONTSNIP_API_KEY";

/// Default number of catalog entries per browse-panel page.
const fn default_page_size() -> usize {
    50
}

/// User configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Config {
    /// Webfonts API key. `FONTSNIP_API_KEY` takes precedence when set.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Catalog entries per browse-panel page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,

    /// Catalog endpoint override (must be HTTPS). Mainly for tests and
    /// proxied environments; leave unset to use the fixed endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            page_size: default_page_size(),
            endpoint: None,
        }
    }
}

impl Config {
    /// Load the config file, creating a default one when missing.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path())
    }

    /// Load a config file from an explicit path.
    ///
    /// When the file does not exist a default config is written there
    /// so the user has a template to put the API key into.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            log::info!("Loading config from {:?}", path);
            let contents = fs::read_to_string(path).map_err(ConfigError::Io)?;
            let config: Config = serde_yaml_ng::from_str(&contents).map_err(ConfigError::Parse)?;
            config.validate()?;
            Ok(config)
        } else {
            log::info!("Config file not found, creating default at {:?}", path);
            let config = Self::default();
            if let Err(e) = config.save_to(path) {
                log::error!("Failed to save default config: {}", e);
                return Err(e);
            }
            Ok(config)
        }
    }

    /// Save the config to its default path.
    pub fn save(&self) -> Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save the config to an explicit path, creating parent directories.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(ConfigError::Io)?;
        }
        let yaml = serde_yaml_ng::to_string(self).map_err(ConfigError::Parse)?;
        fs::write(path, yaml).map_err(ConfigError::Io)?;
        Ok(())
    }

    /// Semantic validation of field values.
    fn validate(&self) -> Result<(), ConfigError> {
        if self.page_size == 0 {
            return Err(ConfigError::Validation(
                "page_size must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Resolve the API key: environment variable first, then the file.
    pub fn resolve_api_key(&self) -> Option<String> {
        self.resolve_api_key_with(std::env::var(API_KEY_ENV_VAR).ok())
    }

    /// Key resolution with the environment value passed in, so the
    /// precedence rule is testable without mutating process state.
    fn resolve_api_key_with(&self, env_value: Option<String>) -> Option<String> {
        env_value
            .filter(|v| !v.trim().is_empty())
            .or_else(|| self.api_key.clone().filter(|v| !v.trim().is_empty()))
    }

    /// Get the configuration file path.
    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.yaml")
    }

    /// Get the configuration directory.
    pub fn config_dir() -> PathBuf {
        #[cfg(target_os = "windows")]
        {
            if let Some(config_dir) = dirs::config_dir() {
                config_dir.join("fontsnip")
            } else {
                PathBuf::from(".")
            }
        }
        #[cfg(not(target_os = "windows"))]
        {
            // XDG convention on all platforms: ~/.config/fontsnip
            if let Some(home_dir) = dirs::home_dir() {
                home_dir.join(".config").join("fontsnip")
            } else {
                PathBuf::from(".")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.api_key, None);
        assert_eq!(config.page_size, 50);
        assert_eq!(config.endpoint, None);
    }

    #[test]
    fn test_yaml_round_trip() {
        let config = Config {
            api_key: Some("abc123".to_string()),
            page_size: 25,
            endpoint: Some("https://mirror.example.com/webfonts".to_string()),
        };
        let yaml = serde_yaml_ng::to_string(&config).unwrap();
        let parsed: Config = serde_yaml_ng::from_str(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let parsed: Config = serde_yaml_ng::from_str("api_key: xyz\n").unwrap();
        assert_eq!(parsed.api_key.as_deref(), Some("xyz"));
        assert_eq!(parsed.page_size, 50);
    }

    #[test]
    fn test_env_var_takes_precedence() {
        let config = Config {
            api_key: Some("from-file".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_api_key_with(Some("from-env".to_string())),
            Some("from-env".to_string())
        );
    }

    #[test]
    fn test_file_key_when_env_unset_or_blank() {
        let config = Config {
            api_key: Some("from-file".to_string()),
            ..Config::default()
        };
        assert_eq!(
            config.resolve_api_key_with(None),
            Some("from-file".to_string())
        );
        assert_eq!(
            config.resolve_api_key_with(Some("  ".to_string())),
            Some("from-file".to_string())
        );
    }

    #[test]
    fn test_no_key_anywhere() {
        let config = Config::default();
        assert_eq!(config.resolve_api_key_with(None), None);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.yaml");
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config, Config::default());
        assert!(path.exists(), "default config file should be written");
    }

    #[test]
    fn test_load_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "api_key: saved\npage_size: 10\n").unwrap();
        let config = Config::load_from(&path).unwrap();
        assert_eq!(config.api_key.as_deref(), Some("saved"));
        assert_eq!(config.page_size, 10);
    }

    #[test]
    fn test_load_rejects_zero_page_size() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "page_size: 0\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        let cfg_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(cfg_err, ConfigError::Validation(_)));
    }

    #[test]
    fn test_load_rejects_malformed_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "page_size: [not a number\n").unwrap();
        let err = Config::load_from(&path).unwrap_err();
        let cfg_err = err.downcast_ref::<ConfigError>().unwrap();
        assert!(matches!(cfg_err, ConfigError::Parse(_)));
    }
}
