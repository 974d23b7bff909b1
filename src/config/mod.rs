//! Configuration module for Finboard
//!
//! Layered configuration loading: defaults, then a TOML file, then
//! `FINBOARD_*` environment variable overrides.

pub mod error;

pub use error::ConfigError;

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::Path;

/// Unified configuration for the Finboard client.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FinboardConfig {
    /// Analysis service settings
    pub service: ServiceConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Analysis service settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServiceConfig {
    /// Base URL of the analysis service.
    pub base_url: String,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:5000".to_string(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Base log level (trace, debug, info, warn, error).
    pub level: String,
    /// Per-component level overrides, e.g. `gateway = "debug"`.
    pub component_levels: Option<HashMap<String, String>>,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            component_levels: None,
        }
    }
}

impl FinboardConfig {
    /// Loads configuration from a TOML file, or defaults when no path is
    /// given.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(p) => {
                if !p.exists() {
                    return Err(ConfigError::NotFound(p.to_path_buf()));
                }
                let content = std::fs::read_to_string(p)?;
                toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
            }
            None => Ok(Self::default()),
        }
    }

    /// Applies `FINBOARD_*` environment variable overrides.
    pub fn with_env_overrides(mut self) -> Self {
        if let Ok(base_url) = std::env::var("FINBOARD_BASE_URL") {
            self.service.base_url = base_url;
        }
        if let Ok(level) = std::env::var("FINBOARD_LOG_LEVEL") {
            self.logging.level = level;
        }
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = FinboardConfig::default();
        assert_eq!(config.service.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_parse_from_toml() {
        let toml = r#"
            [service]
            base_url = "http://10.0.0.2:8080"

            [logging]
            level = "debug"
        "#;
        let config: FinboardConfig = toml::from_str(toml).unwrap();
        assert_eq!(config.service.base_url, "http://10.0.0.2:8080");
        assert_eq!(config.logging.level, "debug");
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: FinboardConfig = toml::from_str("[logging]\nlevel = \"warn\"").unwrap();
        assert_eq!(config.service.base_url, "http://127.0.0.1:5000");
        assert_eq!(config.logging.level, "warn");
    }

    #[test]
    fn test_load_missing_file_errors() {
        let result = FinboardConfig::load(Some(Path::new("/nonexistent/finboard.toml")));
        assert!(matches!(result, Err(ConfigError::NotFound(_))));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[service]\nbase_url = \"http://localhost:9999\"").unwrap();
        let config = FinboardConfig::load(Some(file.path())).unwrap();
        assert_eq!(config.service.base_url, "http://localhost:9999");
    }

    #[test]
    fn test_load_invalid_toml_errors() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "not valid toml [[[").unwrap();
        let result = FinboardConfig::load(Some(file.path()));
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}
