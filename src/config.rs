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
    pub api: ApiConfig,

    #[serde(default)]
    pub messages: MessagesConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

/// API server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct ApiConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    /// Allowed CORS origins; empty means any origin
    #[serde(default)]
    pub cors_origins: Vec<String>,

    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_request_timeout() -> u64 {
    30
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            cors_origins: Vec::new(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Get the socket address string
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Notification log configuration
#[derive(Debug, Clone, Deserialize)]
pub struct MessagesConfig {
    /// Maximum number of retained messages (0 = unbounded)
    #[serde(default = "default_message_capacity")]
    pub capacity: usize,

    /// Also write every message to the tracing log
    #[serde(default = "default_echo_to_log")]
    pub echo_to_log: bool,
}

fn default_message_capacity() -> usize {
    1000
}

fn default_echo_to_log() -> bool {
    true
}

impl Default for MessagesConfig {
    fn default() -> Self {
        Self {
            capacity: default_message_capacity(),
            echo_to_log: default_echo_to_log(),
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    #[serde(default = "default_log_format")]
    pub format: String,

    pub file: Option<String>,
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
            file: None,
        }
    }
}

impl LoggingConfig {
    pub fn is_json(&self) -> bool {
        self.format.eq_ignore_ascii_case("json")
    }
}

impl Config {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            error: e.to_string(),
        })?;

        Self::parse(&content).map_err(|e| ConfigError::Parse {
            path: path.to_path_buf(),
            error: e.to_string(),
        })
    }

    /// Parse configuration from TOML text
    pub fn parse(content: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(content)
    }

    /// Load configuration from environment variables only
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Config::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load configuration with environment variable overrides
    pub fn load_with_env(path: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::load(path)?;
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Load from default locations or environment.
    ///
    /// A config file that exists but cannot be read or parsed is an error;
    /// it never falls back to the defaults.
    pub fn load_default() -> Result<Self, ConfigError> {
        let config_paths: Vec<PathBuf> = [
            dirs::config_dir().map(|p| p.join("imposc").join("config.toml")),
            Some(PathBuf::from("/etc/imposc/config.toml")),
            Some(PathBuf::from("./config.toml")),
        ]
        .into_iter()
        .flatten()
        .collect();

        Self::load_first(&config_paths)
    }

    /// Load the first existing file in `paths`, or the environment-only
    /// config when none exists
    pub fn load_first(paths: &[PathBuf]) -> Result<Self, ConfigError> {
        match paths.iter().find(|path| path.exists()) {
            Some(path) => {
                let config = Self::load_with_env(path)?;
                tracing::info!("Loaded config from {:?}", path);
                Ok(config)
            }
            None => {
                tracing::info!("Using default config with environment overrides");
                Self::from_env()
            }
        }
    }

    /// Apply environment variable overrides to an existing config
    fn apply_env_overrides(&mut self) -> Result<(), ConfigError> {
        self.apply_overrides(|key| std::env::var(key).ok())
    }

    /// Apply overrides from any key lookup (the environment in production)
    pub fn apply_overrides(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        // API overrides
        if let Some(host) = lookup("IMPOSC_API_HOST") {
            self.api.host = host;
        }
        if let Some(port) = lookup("IMPOSC_API_PORT") {
            self.api.port = parse_override("IMPOSC_API_PORT", &port)?;
        }

        // Message log overrides
        if let Some(capacity) = lookup("IMPOSC_MESSAGE_CAPACITY") {
            self.messages.capacity = parse_override("IMPOSC_MESSAGE_CAPACITY", &capacity)?;
        }

        // Logging overrides
        if let Some(level) = lookup("IMPOSC_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Some(format) = lookup("IMPOSC_LOG_FORMAT") {
            self.logging.format = format;
        }

        Ok(())
    }
}

fn parse_override<T: std::str::FromStr>(key: &str, value: &str) -> Result<T, ConfigError> {
    value.parse().map_err(|_| ConfigError::InvalidOverride {
        key: key.to_string(),
        value: value.to_string(),
    })
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path:?}: {error}")]
    Io { path: PathBuf, error: String },

    #[error("Failed to parse config file {path:?}: {error}")]
    Parse { path: PathBuf, error: String },

    #[error("Invalid value for {key}: {value:?}")]
    InvalidOverride { key: String, value: String },
}

/// Generate a default config file content
pub fn generate_default_config() -> String {
    r#"# imposc Configuration
#
# Environment variables override these settings:
# - IMPOSC_API_HOST
# - IMPOSC_API_PORT
# - IMPOSC_MESSAGE_CAPACITY
# - IMPOSC_LOG_LEVEL
# - IMPOSC_LOG_FORMAT

[api]
# API server host
host = "0.0.0.0"

# API server port
port = 8082

# Allowed CORS origins (empty allows any origin)
cors_origins = []

# Request timeout in seconds
request_timeout_secs = 30

[messages]
# Maximum number of notification messages kept in memory (0 = unbounded)
capacity = 1000

# Also write each notification to the log
echo_to_log = true

[logging]
# Log level: trace, debug, info, warn, error
level = "info"

# Log format: pretty (for development) or json (for production)
format = "pretty"

# Optional log file path
# file = "/var/log/imposc/imposc.log"
"#
    .to_string()
}
