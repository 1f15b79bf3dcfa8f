use reqwest::Url;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;
use tracing::info;

/// Backend served by `manage.py runserver` with the API mounted at `/api/`
pub const DEFAULT_BASE_URL: &str = "http://localhost:8000/api";

pub const BASE_URL_ENV: &str = "SHOP_API_BASE_URL";
pub const TIMEOUT_ENV: &str = "SHOP_API_TIMEOUT_SECS";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to load config file: {0}")]
    FileError(#[from] std::io::Error),

    #[error("Failed to parse YAML: {0}")]
    YamlError(#[from] serde_yaml::Error),

    #[error("Invalid configuration: {0}")]
    ValidationError(String),
}

pub type Result<T> = std::result::Result<T, ConfigError>;

/// HTTP client configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientConfig {
    /// API root, e.g. `https://shop.example.com/api`
    pub base_url: String,

    /// Whole-request timeout
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,

    #[serde(default = "default_pool_idle_timeout_secs")]
    pub pool_idle_timeout_secs: u64,

    #[serde(default)]
    pub user_agent: Option<String>,

    /// Log level (error, warn, info, debug, trace)
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

fn default_pool_idle_timeout_secs() -> u64 {
    30
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

impl ClientConfig {
    /// Configuration with default timeouts
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
            pool_idle_timeout_secs: default_pool_idle_timeout_secs(),
            user_agent: None,
            log_level: default_log_level(),
        }
    }

    /// Load configuration from YAML file
    pub fn load(config_path: impl AsRef<Path>) -> Result<Self> {
        Self::load_with(config_path, |key| std::env::var(key).ok())
    }

    /// Load configuration from YAML file, taking overrides from `lookup`
    pub fn load_with<F>(config_path: impl AsRef<Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let yaml_content = std::fs::read_to_string(config_path)?;
        let mut config: ClientConfig = serde_yaml::from_str(&yaml_content)?;

        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Build configuration from `.env` and environment variables only
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Defaults with overrides from `lookup`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();
        config.apply_overrides(lookup)?;
        config.validate()?;

        Ok(config)
    }

    /// Apply overrides from a variable lookup (the process environment in practice)
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(base_url) = lookup(BASE_URL_ENV) {
            info!("Overriding base URL from environment variable");
            self.base_url = base_url;
        }

        if let Some(timeout) = lookup(TIMEOUT_ENV) {
            self.timeout_secs = timeout.trim().parse().map_err(|_| {
                ConfigError::ValidationError(format!(
                    "{} must be a whole number of seconds, got '{}'",
                    TIMEOUT_ENV, timeout
                ))
            })?;
            info!("Overriding request timeout from environment variable");
        }

        Ok(())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.base_url).map_err(|e| {
            ConfigError::ValidationError(format!("base_url '{}' is invalid: {}", self.base_url, e))
        })?;

        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::ValidationError(
                "base_url must use http or https".to_string(),
            ));
        }

        if self.timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "timeout_secs must be greater than 0".to_string(),
            ));
        }

        if self.connect_timeout_secs == 0 {
            return Err(ConfigError::ValidationError(
                "connect_timeout_secs must be greater than 0".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.timeout_secs, 30);
        assert_eq!(config.connect_timeout_secs, 10);
        assert_eq!(config.log_level, "info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_yaml_with_only_base_url() {
        let config: ClientConfig =
            serde_yaml::from_str("base_url: https://shop.example.com/api\n").unwrap();
        assert_eq!(config, ClientConfig::new("https://shop.example.com/api"));
    }

    #[test]
    fn test_overrides() {
        let mut config = ClientConfig::default();
        config
            .apply_overrides(|key| match key {
                BASE_URL_ENV => Some("https://staging.example.com/api".to_string()),
                TIMEOUT_ENV => Some("5".to_string()),
                _ => None,
            })
            .unwrap();

        assert_eq!(config.base_url, "https://staging.example.com/api");
        assert_eq!(config.timeout_secs, 5);
    }

    #[test]
    fn test_from_lookup() {
        let config = ClientConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, ClientConfig::default());

        let err = ClientConfig::from_lookup(|key| (key == TIMEOUT_ENV).then(|| "0".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_bad_timeout_override() {
        let mut config = ClientConfig::default();
        let err = config
            .apply_overrides(|key| (key == TIMEOUT_ENV).then(|| "soon".to_string()))
            .unwrap_err();
        assert!(matches!(err, ConfigError::ValidationError(_)));
    }

    #[test]
    fn test_validation() {
        assert!(ClientConfig::new("not a url").validate().is_err());
        assert!(ClientConfig::new("ws://example.com").validate().is_err());

        let mut config = ClientConfig::default();
        config.timeout_secs = 0;
        assert!(config.validate().is_err());

        let mut config = ClientConfig::default();
        config.connect_timeout_secs = 0;
        assert!(config.validate().is_err());
    }
}
