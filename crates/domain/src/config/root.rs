use serde::{Deserialize, Serialize};
use std::net::IpAddr;
use std::path::Path;

use super::errors::ConfigError;
use super::logging::LoggingConfig;
use super::resolver::ResolverConfig;

const LOCAL_CONFIG: &str = "dnsq.toml";
const SYSTEM_CONFIG: &str = "/etc/dnsq/config.toml";

/// Main configuration structure for dnsq
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    /// Query target and retry policy
    #[serde(default)]
    pub resolver: ResolverConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Config {
    /// Load configuration from file or use defaults
    ///
    /// Priority order:
    /// 1. Explicitly provided path
    /// 2. dnsq.toml in current directory
    /// 3. /etc/dnsq/config.toml
    /// 4. Default configuration
    pub fn load(path: Option<&str>, cli_overrides: CliOverrides) -> Result<Self, ConfigError> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::get_config_path() {
                Some(found) => Self::from_file(&found)?,
                None => Self::default(),
            },
        };

        config.apply_cli_overrides(cli_overrides);
        Ok(config)
    }

    pub fn from_file(path: &str) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::FileRead(path.to_string(), e.to_string()))?;
        Self::from_toml(&contents)
    }

    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    fn apply_cli_overrides(&mut self, overrides: CliOverrides) {
        if let Some(server) = overrides.server {
            self.resolver.server = Some(server);
        }
        if let Some(port) = overrides.port {
            self.resolver.port = port;
        }
        if let Some(timeout) = overrides.timeout_secs {
            self.resolver.timeout_secs = timeout;
        }
        if let Some(retries) = overrides.retries {
            self.resolver.retries = retries;
        }
        if let Some(level) = overrides.log_level {
            self.logging.level = level;
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.resolver.port == 0 {
            return Err(ConfigError::Validation("DNS port cannot be 0".to_string()));
        }
        if self.resolver.timeout_secs == 0 {
            return Err(ConfigError::Validation(
                "Timeout must be at least 1 second".to_string(),
            ));
        }
        if self.resolver.retries == 0 {
            return Err(ConfigError::Validation(
                "Retries must be at least 1".to_string(),
            ));
        }
        if let Some(server) = &self.resolver.server {
            if server.parse::<IpAddr>().is_err() {
                return Err(ConfigError::Validation(format!(
                    "Did not recognize {} as a valid IP",
                    server
                )));
            }
        }
        Ok(())
    }

    /// Get the path to the configuration file being used
    pub fn get_config_path() -> Option<String> {
        [LOCAL_CONFIG, SYSTEM_CONFIG]
            .into_iter()
            .find(|p| Path::new(p).exists())
            .map(str::to_string)
    }
}

#[derive(Debug, Default)]
pub struct CliOverrides {
    pub server: Option<String>,
    pub port: Option<u16>,
    pub timeout_secs: Option<u64>,
    pub retries: Option<u32>,
    pub log_level: Option<String>,
}
