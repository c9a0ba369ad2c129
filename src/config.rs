//! Configuration for Stampcard.
//!
//! Loaded from YAML with a fallback chain; every key has a default, so an
//! empty or partial file is valid.

use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Config {
    /// Log level used when RUST_LOG is not set
    pub log_level: String,
    pub storage: StorageConfig,
    pub business: BusinessConfig,
    pub messaging: MessagingConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            storage: StorageConfig::default(),
            business: BusinessConfig::default(),
            messaging: MessagingConfig::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct StorageConfig {
    /// Directory holding the collection files
    pub data_dir: PathBuf,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: dirs::data_local_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join("stampcard")
                .join("data"),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct BusinessConfig {
    pub name: String,
    pub reward_description: String,
}

impl Default for BusinessConfig {
    fn default() -> Self {
        Self {
            name: "Furaha".to_string(),
            reward_description: "FREE service".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct MessagingConfig {
    pub country_code: String,
    pub trunk_prefix: String,
    pub link_base: String,
}

impl Default for MessagingConfig {
    fn default() -> Self {
        Self {
            country_code: "254".to_string(),
            trunk_prefix: "0".to_string(),
            link_base: crate::notify::DEFAULT_LINK_BASE.to_string(),
        }
    }
}

impl Config {
    /// Load configuration with fallback chain
    ///
    /// Search order:
    /// 1. Explicit path if provided
    /// 2. ~/.config/stampcard/stampcard.yml
    /// 3. ./stampcard.yml
    /// 4. Defaults
    pub fn load(config_path: Option<&PathBuf>) -> Result<Self> {
        // If explicit config path provided, try to load it
        if let Some(path) = config_path {
            return Self::load_from_file(path).context(format!("Failed to load config from {}", path.display()));
        }

        let project_name = env!("CARGO_PKG_NAME");

        // Try primary location: ~/.config/<project>/<project>.yml
        if let Some(config_dir) = dirs::config_dir() {
            let primary_config = config_dir.join(project_name).join(format!("{}.yml", project_name));
            if primary_config.exists() {
                match Self::load_from_file(&primary_config) {
                    Ok(config) => return Ok(config),
                    Err(e) => {
                        log::warn!("Failed to load config from {}: {}", primary_config.display(), e);
                    }
                }
            }
        }

        // Try fallback location: ./<project>.yml
        let fallback_config = PathBuf::from(format!("{}.yml", project_name));
        if fallback_config.exists() {
            match Self::load_from_file(&fallback_config) {
                Ok(config) => return Ok(config),
                Err(e) => {
                    log::warn!("Failed to load config from {}: {}", fallback_config.display(), e);
                }
            }
        }

        // No config file found, use defaults
        log::info!("No config file found, using defaults");
        Ok(Self::default())
    }

    fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path).context("Failed to read config file")?;

        let config: Self = serde_yaml::from_str(&content).context("Failed to parse config file")?;

        log::info!("Loaded config from: {}", path.as_ref().display());
        Ok(config)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<()> {
        let messaging = &self.messaging;
        if messaging.country_code.is_empty() || !is_digits(&messaging.country_code) {
            eyre::bail!("messaging.country-code must be one or more digits");
        }
        if !is_digits(&messaging.trunk_prefix) {
            eyre::bail!("messaging.trunk-prefix must contain only digits");
        }
        if self.business.name.trim().is_empty() {
            eyre::bail!("business.name must not be empty");
        }
        Ok(())
    }
}

fn is_digits(value: &str) -> bool {
    value.chars().all(|c| c.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.log_level, "info");
        assert_eq!(config.business.name, "Furaha");
        assert_eq!(config.messaging.country_code, "254");
        assert_eq!(config.messaging.trunk_prefix, "0");
        assert!(config.storage.data_dir.ends_with("stampcard/data"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_load_explicit_partial_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("stampcard.yml");
        fs::write(
            &path,
            "business:\n  name: Kito Salon\nmessaging:\n  country-code: \"44\"\nstorage:\n  data-dir: /tmp/kito\n",
        )
        .unwrap();

        let config = Config::load(Some(&path)).unwrap();
        assert_eq!(config.business.name, "Kito Salon");
        assert_eq!(config.business.reward_description, "FREE service");
        assert_eq!(config.messaging.country_code, "44");
        assert_eq!(config.messaging.trunk_prefix, "0");
        assert_eq!(config.storage.data_dir, PathBuf::from("/tmp/kito"));
    }

    #[test]
    fn test_load_explicit_missing_file_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("missing.yml");
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_load_explicit_invalid_yaml_fails() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("bad.yml");
        fs::write(&path, "business: [unclosed").unwrap();
        assert!(Config::load(Some(&path)).is_err());
    }

    #[test]
    fn test_validate_rejects_bad_country_code() {
        let mut config = Config::default();
        config.messaging.country_code = "+254".to_string();
        assert!(config.validate().is_err());

        config.messaging.country_code = String::new();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_trunk_prefix() {
        let mut config = Config::default();
        config.messaging.trunk_prefix = String::new();
        assert!(config.validate().is_ok());

        config.messaging.trunk_prefix = "x".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_blank_business_name() {
        let mut config = Config::default();
        config.business.name = "  ".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_yaml_round_trip_uses_kebab_case() {
        let yaml = serde_yaml::to_string(&Config::default()).unwrap();
        assert!(yaml.contains("log-level"));
        assert!(yaml.contains("reward-description"));
        assert!(yaml.contains("country-code"));
    }
}
