//! CLI utilities for binaries
//!
//! Handles configuration loading and environment variables
//! for all binary executables.

use shop_api::config::{ClientConfig, ConfigError};
use std::path::PathBuf;
use tracing::info;

/// Type of configuration to load
#[derive(Debug, Clone)]
pub enum ConfigType {
    /// API client configuration (shop_api.yaml)
    Client,
    /// Custom path
    Custom(String),
}

impl ConfigType {
    /// Get the default path for this config type
    pub fn default_path(&self) -> &str {
        match self {
            ConfigType::Client => "config/shop_api.yaml",
            ConfigType::Custom(path) => path,
        }
    }

    /// Get the environment variable name for this config type
    pub fn env_var_name(&self) -> &str {
        "SHOP_CONFIG_PATH"
    }
}

/// Load configuration path from environment or use default
///
/// # Examples
/// ```
/// use shopfront::bin_common::{load_config_from_env, ConfigType};
///
/// let path = load_config_from_env(ConfigType::Client);
/// ```
pub fn load_config_from_env(config_type: ConfigType) -> PathBuf {
    if let ConfigType::Custom(path) = &config_type {
        return PathBuf::from(path);
    }

    std::env::var(config_type.env_var_name())
        .unwrap_or_else(|_| config_type.default_path().to_string())
        .into()
}

/// Load the client configuration
///
/// Reads the YAML file when it exists, otherwise falls back to
/// environment variables only.
pub fn load_client_config(config_type: ConfigType) -> Result<ClientConfig, ConfigError> {
    dotenv::dotenv().ok();
    load_client_config_with(config_type, |key| std::env::var(key).ok())
}

/// Same as [`load_client_config`], with overrides taken from `lookup`
/// instead of the process environment
pub fn load_client_config_with<F>(
    config_type: ConfigType,
    lookup: F,
) -> Result<ClientConfig, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let path = load_config_from_env(config_type);

    if path.exists() {
        info!("Loading configuration from {}", path.display());
        ClientConfig::load_with(&path, lookup)
    } else {
        ClientConfig::from_lookup(lookup)
    }
}

/// Parse command line arguments for a binary
///
/// Returns a vector of arguments (excluding the program name)
pub fn parse_args() -> Vec<String> {
    std::env::args().skip(1).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_type_paths() {
        assert_eq!(ConfigType::Client.default_path(), "config/shop_api.yaml");

        let custom = ConfigType::Custom("custom/path.yaml".to_string());
        assert_eq!(custom.default_path(), "custom/path.yaml");
    }

    #[test]
    fn test_config_type_env_vars() {
        assert_eq!(ConfigType::Client.env_var_name(), "SHOP_CONFIG_PATH");
    }
}
