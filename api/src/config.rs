//! Service configuration module
//! Loads listener, CORS, static asset and acknowledgment settings from the environment

use std::env;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;
use tracing::info;

/// Origins always allowed in addition to `FRONTEND_URL`
pub const DEFAULT_ALLOWED_ORIGINS: [&str; 2] = ["http://localhost:3000", "http://localhost:3001"];

const DEFAULT_PORT: u16 = 5000;
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_STATIC_DIR: &str = "build";
const DEFAULT_ACK_DELAY_MS: u64 = 1000;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid port: {0}")]
    InvalidPort(String),
    #[error("Invalid host: {0}")]
    InvalidHost(String),
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Deployment environment
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
    Other(String),
}

impl Environment {
    fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "" | "development" => Environment::Development,
            "production" => Environment::Production,
            other => Environment::Other(other.to_string()),
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Environment::Development => "development",
            Environment::Production => "production",
            Environment::Other(name) => name,
        }
    }
}

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: IpAddr,
    pub port: u16,
    pub environment: Environment,
    pub frontend_url: Option<String>,
    pub static_dir: PathBuf,
    pub ack_delay: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: DEFAULT_PORT,
            environment: Environment::Development,
            frontend_url: None,
            static_dir: PathBuf::from(DEFAULT_STATIC_DIR),
            ack_delay: Duration::from_millis(DEFAULT_ACK_DELAY_MS),
        }
    }
}

impl AppConfig {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port_raw = lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string());
        let port = port_raw
            .trim()
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidPort(format!("{} ({})", port_raw, e)))?;

        let host_raw = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string());
        let host = host_raw
            .trim()
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidHost(format!("{} ({})", host_raw, e)))?;

        let environment = Environment::parse(
            &lookup("NODE_ENV")
                .or_else(|| lookup("APP_ENV"))
                .unwrap_or_default(),
        );

        let frontend_url = lookup("FRONTEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty());
        if let Some(url) = &frontend_url {
            if !url.starts_with("http://") && !url.starts_with("https://") {
                return Err(ConfigError::InvalidConfig(format!(
                    "FRONTEND_URL must be an http(s) origin: {}",
                    url
                )));
            }
        }

        let static_dir = lookup("STATIC_DIR")
            .filter(|dir| !dir.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_STATIC_DIR));

        let ack_delay_ms = match lookup("ACK_DELAY_MS") {
            Some(raw) => raw.trim().parse::<u64>().map_err(|e| {
                ConfigError::InvalidConfig(format!("Invalid ACK_DELAY_MS: {} ({})", raw, e))
            })?,
            None => DEFAULT_ACK_DELAY_MS,
        };

        info!(
            "Service configuration loaded: env={}, port={}, frontend_url={:?}, ack_delay={}ms",
            environment.name(),
            port,
            frontend_url,
            ack_delay_ms
        );

        Ok(AppConfig {
            host,
            port,
            environment,
            frontend_url,
            static_dir,
            ack_delay: Duration::from_millis(ack_delay_ms),
        })
    }

    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Static assets are only served in production
    pub fn serve_static(&self) -> bool {
        self.environment == Environment::Production
    }

    /// CORS allow-list: `FRONTEND_URL` first, then the local development origins
    pub fn allowed_origins(&self) -> Vec<String> {
        self.frontend_url
            .iter()
            .cloned()
            .chain(DEFAULT_ALLOWED_ORIGINS.iter().map(|o| o.to_string()))
            .collect()
    }
}
