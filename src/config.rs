//! Configuration System
//!
//! Handles loading configuration from files and environment variables.
//! Supports TOML config files and environment variable overrides.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Main configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,

    #[serde(default)]
    pub server: ServerConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Where the OctoFit REST API lives
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// Deployment identifier substituted into the host template
    #[serde(default)]
    pub codespace_name: Option<String>,

    #[serde(default = "default_backend_port")]
    pub port: u16,

    #[serde(default = "default_backend_domain")]
    pub domain: String,

    /// Replaces the host template entirely when set
    #[serde(default)]
    pub base_url: Option<String>,

    /// Request timeout; the transport default applies when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_backend_port() -> u16 {
    8000
}

fn default_backend_domain() -> String {
    "app.github.dev".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            codespace_name: None,
            port: default_backend_port(),
            domain: default_backend_domain(),
            base_url: None,
            request_timeout_secs: None,
        }
    }
}

/// Dashboard server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    3000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        let config: Config = toml::from_str(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Ok(config)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Self {
        let mut config = Config::default();
        config.apply_overrides(|key| std::env::var(key).ok());
        config
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_overrides(|key| std::env::var(key).ok());
        Ok(config)
    }

    /// Load from default locations or environment
    #[cfg(feature = "server")]
    pub fn load_default() -> Self {
        let config_paths = [
            dirs::config_dir().map(|p| p.join("octofit").join("config.toml")),
            Some(PathBuf::from("./octofit.toml")),
        ];

        for path in config_paths.iter().flatten() {
            if path.exists() {
                match Self::load_with_env(path) {
                    Ok(config) => {
                        tracing::info!("Loaded config from {:?}", path);
                        return config;
                    }
                    Err(e) => {
                        tracing::warn!("Failed to load config from {:?}: {}", path, e);
                    }
                }
            }
        }

        tracing::debug!("Using default config with environment overrides");
        Self::from_env()
    }

    /// Apply overrides read through `lookup`, which maps a variable name to its value
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        // The Codespaces-provided name is the fallback, the prefixed one wins
        if let Some(name) = lookup("OCTOFIT_CODESPACE_NAME").or_else(|| lookup("CODESPACE_NAME")) {
            self.backend.codespace_name = Some(name);
        }
        if let Some(url) = lookup("OCTOFIT_API_BASE_URL") {
            self.backend.base_url = Some(url);
        }
        if let Some(domain) = lookup("OCTOFIT_API_DOMAIN") {
            self.backend.domain = domain;
        }
        if let Some(port) = lookup("OCTOFIT_API_PORT") {
            if let Ok(p) = port.parse() {
                self.backend.port = p;
            }
        }

        if let Some(host) = lookup("OCTOFIT_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("OCTOFIT_PORT") {
            if let Ok(p) = port.parse() {
                self.server.port = p;
            }
        }

        if let Some(level) = lookup("OCTOFIT_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("OCTOFIT_LOG_FORMAT") {
            self.logging.format = format;
        }
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# OctoFit Dashboard Configuration
#
# Environment variables override these settings:
# - CODESPACE_NAME / OCTOFIT_CODESPACE_NAME
# - OCTOFIT_API_BASE_URL
# - OCTOFIT_API_DOMAIN
# - OCTOFIT_API_PORT
# - OCTOFIT_HOST
# - OCTOFIT_PORT
# - OCTOFIT_LOG_LEVEL
# - OCTOFIT_LOG_FORMAT

[backend]
# Deployment identifier; the API is reached at
# https://{codespace_name}-{port}.{domain}/api/<resource>/
# codespace_name = "my-codespace"

port = 8000
domain = "app.github.dev"

# Bypass the host template, e.g. for a local backend
# base_url = "http://localhost:8000"

# Request timeout in seconds (unset = transport default)
# request_timeout_secs = 30

[server]
# Dashboard server host
host = "0.0.0.0"

# Dashboard server port
port = 3000

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"
"#
    .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.backend.port, 8000);
        assert_eq!(config.backend.domain, "app.github.dev");
        assert!(config.backend.codespace_name.is_none());
        assert!(config.backend.request_timeout_secs.is_none());
        assert_eq!(config.server.addr(), "0.0.0.0:3000");
        assert_eq!(config.logging.format, "pretty");
    }

    #[test]
    fn test_generated_config_parses() {
        let config: Config = toml::from_str(&generate_default_config()).unwrap();
        assert_eq!(config.backend.port, 8000);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[backend]\ncodespace_name = \"fluffy-space\"\nrequest_timeout_secs = 5\n\n[server]\nport = 9090"
        )
        .unwrap();

        let config = Config::load(file.path()).unwrap();
        assert_eq!(config.backend.codespace_name.as_deref(), Some("fluffy-space"));
        assert_eq!(config.backend.request_timeout_secs, Some(5));
        assert_eq!(config.backend.domain, "app.github.dev");
        assert_eq!(config.server.port, 9090);
    }

    #[test]
    fn test_load_invalid_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[backend\nport = ").unwrap();

        let err = Config::load(file.path()).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Config::load(Path::new("/nonexistent/octofit.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn test_overrides() {
        let vars: HashMap<&str, &str> = [
            ("CODESPACE_NAME", "from-codespaces"),
            ("OCTOFIT_API_PORT", "8001"),
            ("OCTOFIT_PORT", "not-a-port"),
            ("OCTOFIT_LOG_FORMAT", "json"),
        ]
        .into_iter()
        .collect();

        let mut config = Config::default();
        config.apply_overrides(|key| vars.get(key).map(|v| v.to_string()));

        assert_eq!(config.backend.codespace_name.as_deref(), Some("from-codespaces"));
        assert_eq!(config.backend.port, 8001);
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.logging.format, "json");
    }

    #[test]
    fn test_prefixed_codespace_name_wins() {
        let mut config = Config::default();
        config.apply_overrides(|key| match key {
            "CODESPACE_NAME" => Some("ambient".to_string()),
            "OCTOFIT_CODESPACE_NAME" => Some("explicit".to_string()),
            _ => None,
        });
        assert_eq!(config.backend.codespace_name.as_deref(), Some("explicit"));
    }
}
