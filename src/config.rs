//! Configuration loading and constants.
//!
//! Loads application configuration from TOML files and defines constants for
//! the diagnostic route, the fixed probe messages, HTTP cache headers, logging
//! defaults and default paths. `AppConfig` is the root configuration struct.

use const_format::formatcp;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::Path;

// =============================================================================
// Routes
// =============================================================================

/// Versioned API prefix
pub const API_V1_PREFIX: &str = "/api/v1";

/// Diagnostic endpoint path, matched for any HTTP method
pub const ELK_PATH: &str = formatcp!("{}/elk", API_V1_PREFIX);

/// Liveness probe path
pub const HEALTH_PATH: &str = "/health";

// =============================================================================
// Diagnostic Probe
// =============================================================================

/// Body returned by the diagnostic endpoint
pub const ELK_RESPONSE_BODY: &str = "ELK Test";

/// Informational-level probe message
pub const ELK_INFO_MESSAGE: &str = "ELK INFO TEST";

/// Warning-level probe message
pub const ELK_WARNING_MESSAGE: &str = "ELK WARNING TEST";

/// Error-level probe message
pub const ELK_ERROR_MESSAGE: &str = "ELK SEVERE TEST";

/// Component name attached to every probe record
pub const ELK_COMPONENT: &str = "elk";

// =============================================================================
// HTTP Response Cache Control
// =============================================================================

/// Diagnostic responses must never be served from an intermediary cache,
/// otherwise the probe records are not emitted.
pub const CACHE_CONTROL_DIAGNOSTIC: &str = "no-store";

// =============================================================================
// Defaults
// =============================================================================

/// Default configuration file path
pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";

/// Default log filter when neither CLI, RUST_LOG nor config set one
pub const DEFAULT_LOG_FILTER: &str = "elk_probe=info,tower_http=info";

/// Default time allowed for in-flight requests on shutdown
pub const DEFAULT_SHUTDOWN_GRACE_SECS: u64 = 30;

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// HTTP server configuration
    pub http: HttpServerConfig,
    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// HTTP server configuration
#[derive(Debug, Clone, Deserialize)]
pub struct HttpServerConfig {
    pub host: String,
    pub port: u16,
    /// Seconds to wait for open connections after SIGTERM/SIGINT (default: 30)
    #[serde(default = "HttpServerConfig::default_shutdown_grace")]
    pub shutdown_grace_seconds: u64,
}

impl HttpServerConfig {
    fn default_shutdown_grace() -> u64 {
        DEFAULT_SHUTDOWN_GRACE_SECS
    }

    /// Parse `host:port` into a socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        format!("{}:{}", self.host, self.port)
            .parse()
            .map_err(|e| {
                ConfigError::Validation(format!(
                    "Invalid http.host or http.port '{}:{}': {}",
                    self.host, self.port, e
                ))
            })
    }
}

/// Output format for log records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines
    #[default]
    Text,
    /// One JSON document per record, for log shippers
    Json,
}

/// Logging configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct LoggingConfig {
    /// Log format: "text" (human-readable, default) or "json" (structured)
    #[serde(default)]
    pub format: LogFormat,
    /// EnvFilter directive used when neither CLI nor RUST_LOG provide one
    pub filter: Option<String>,
}

impl AppConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        contents.parse()
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.http.port == 0 {
            return Err(ConfigError::Validation(
                "http.port must be non-zero".to_string(),
            ));
        }
        self.http.socket_addr()?;
        Ok(())
    }
}

impl std::str::FromStr for AppConfig {
    type Err = ConfigError;

    fn from_str(contents: &str) -> Result<Self, Self::Err> {
        let config: AppConfig = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Configuration error: {0}")]
    Validation(String),
}
