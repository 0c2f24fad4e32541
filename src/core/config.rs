//! Configuration management for the MCP server.
//!
//! Configuration is populated from environment variables (a `.env` file is
//! honored) on top of defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default Directus address for a local instance.
pub const DEFAULT_DIRECTUS_URL: &str = "http://localhost:8055";

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// Directus connection settings.
    pub directus: DirectusConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,

    /// Whether to include timestamps in log output.
    pub with_timestamps: bool,
}

/// Directus connection settings.
#[derive(Clone, Serialize, Deserialize)]
pub struct DirectusConfig {
    /// Base URL of the Directus instance.
    pub url: String,

    /// Static access token sent as a bearer token.
    pub token: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for DirectusConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DirectusConfig")
            .field("url", &self.url)
            .field("token", &self.token.as_ref().map(|_| "[REDACTED]"))
            .finish()
    }
}

impl Default for DirectusConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_DIRECTUS_URL.to_string(),
            token: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "directus-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                with_timestamps: true,
            },
            transport: TransportConfig::default(),
            directus: DirectusConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings use the `MCP_` prefix (`MCP_SERVER_NAME`, `MCP_LOG_LEVEL`);
    /// the Directus connection uses `DIRECTUS_URL` and `DIRECTUS_TOKEN`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(timestamps) = std::env::var("MCP_LOG_TIMESTAMPS") {
            config.logging.with_timestamps = timestamps.parse().unwrap_or(true);
        }

        config.transport = TransportConfig::from_env();

        if let Ok(url) = std::env::var("DIRECTUS_URL") {
            config.directus.url = url;
        }

        config.directus.token = std::env::var("DIRECTUS_TOKEN")
            .ok()
            .filter(|t| !t.trim().is_empty());

        config
    }

    /// Report notable settings. Call once logging is initialized.
    pub fn log_summary(&self) {
        info!("Directus instance: {}", self.directus.url);
        if self.directus.token.is_some() {
            info!("Directus access token loaded from environment");
        } else {
            warn!(
                "DIRECTUS_TOKEN not set - requests are sent unauthenticated \
                 and will only succeed for public permissions"
            );
        }
    }
}
