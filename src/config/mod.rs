//! Configuration module for the Vidhigya backend and its data client.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::errors::AppError;

/// Output format of the tracing subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    Text,
    Json,
}

impl LogFormat {
    fn parse(value: &str) -> Self {
        if value.eq_ignore_ascii_case("json") {
            LogFormat::Json
        } else {
            LogFormat::Text
        }
    }
}

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Deployment name reported by the health endpoint
    pub environment: String,
    /// Directory holding the built web client; `index.html` is the catch-all
    pub static_dir: PathBuf,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    pub log_format: LogFormat,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let bind_addr = env::var("VIDHIGYA_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:3000".to_string())
            .parse()
            .map_err(|e| AppError::Internal(format!("Invalid VIDHIGYA_BIND_ADDR: {}", e)))?;

        let environment =
            env::var("VIDHIGYA_ENVIRONMENT").unwrap_or_else(|_| "production".to_string());

        let static_dir = env::var("VIDHIGYA_STATIC_DIR")
            .unwrap_or_else(|_| "./public".to_string())
            .into();

        let (log_level, log_format) = logging_from_env();

        Ok(Self {
            bind_addr,
            environment,
            static_dir,
            log_level,
            log_format,
        })
    }
}

/// Access-layer configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the REST API, including the `/api` prefix
    pub base_url: String,
    /// Upper bound on each remote call before it counts as failed
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:3000/api".to_string(),
            timeout: Duration::from_secs(5),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let defaults = Self::default();

        let base_url = env::var("VIDHIGYA_API_BASE")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or(defaults.base_url);

        let timeout = match env::var("VIDHIGYA_API_TIMEOUT_MS") {
            Ok(raw) => raw
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|e| {
                    AppError::Internal(format!("Invalid VIDHIGYA_API_TIMEOUT_MS: {}", e))
                })?,
            Err(_) => defaults.timeout,
        };

        Ok(Self { base_url, timeout })
    }
}

/// Log level and format shared by both binaries.
pub fn logging_from_env() -> (String, LogFormat) {
    let log_level = env::var("VIDHIGYA_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = env::var("VIDHIGYA_LOG_FORMAT")
        .map(|v| LogFormat::parse(&v))
        .unwrap_or(LogFormat::Text);
    (log_level, log_format)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Both configs read the same process environment, so they are checked in one test.
    #[test]
    fn test_default_config() {
        for key in [
            "VIDHIGYA_BIND_ADDR",
            "VIDHIGYA_ENVIRONMENT",
            "VIDHIGYA_STATIC_DIR",
            "VIDHIGYA_LOG_LEVEL",
            "VIDHIGYA_LOG_FORMAT",
            "VIDHIGYA_API_BASE",
            "VIDHIGYA_API_TIMEOUT_MS",
        ] {
            env::remove_var(key);
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:3000");
        assert_eq!(config.environment, "production");
        assert_eq!(config.static_dir, PathBuf::from("./public"));
        assert_eq!(config.log_level, "info");
        assert_eq!(config.log_format, LogFormat::Text);

        let client = ClientConfig::from_env().unwrap();
        assert_eq!(client.base_url, "http://127.0.0.1:3000/api");
        assert_eq!(client.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_log_format_parse() {
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("pretty"), LogFormat::Text);
    }
}
