//! Configuration module for the admin console backend.
//!
//! All configuration is loaded from environment variables with sensible defaults.

use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::errors::AppError;

/// Application configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Pre-shared key for API authentication (auth is off when unset)
    pub api_psk: Option<String>,
    /// Address to bind the server to
    pub bind_addr: SocketAddr,
    /// Log level (trace, debug, info, warn, error)
    pub log_level: String,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
    /// Artificial delay applied before every mutation
    pub mock_latency: Duration,
    /// Whether collections start with the bundled fixture data
    pub seed_fixtures: bool,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, AppError> {
        dotenvy::dotenv().ok();

        let api_psk = env::var("KINSHIP_API_PSK").ok().filter(|k| !k.is_empty());

        let bind_addr = env::var("KINSHIP_BIND_ADDR")
            .unwrap_or_else(|_| "127.0.0.1:8080".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid KINSHIP_BIND_ADDR: {}", e)))?;

        let log_level = env::var("KINSHIP_LOG_LEVEL").unwrap_or_else(|_| "info".to_string());

        let log_json = match env::var("KINSHIP_LOG_FORMAT") {
            Ok(v) if v.eq_ignore_ascii_case("json") => true,
            Ok(v) if v.eq_ignore_ascii_case("text") => false,
            Ok(v) => return Err(AppError::Config(format!("Invalid KINSHIP_LOG_FORMAT: {}", v))),
            Err(_) => false,
        };

        let latency_ms: u64 = env::var("KINSHIP_MOCK_LATENCY_MS")
            .unwrap_or_else(|_| "1000".to_string())
            .parse()
            .map_err(|e| AppError::Config(format!("Invalid KINSHIP_MOCK_LATENCY_MS: {}", e)))?;

        let seed_fixtures = match env::var("KINSHIP_SEED_FIXTURES") {
            Ok(v) => parse_flag(&v).ok_or_else(|| {
                AppError::Config(format!("Invalid KINSHIP_SEED_FIXTURES: {}", v))
            })?,
            Err(_) => true,
        };

        Ok(Self {
            api_psk,
            bind_addr,
            log_level,
            log_json,
            mock_latency: Duration::from_millis(latency_ms),
            seed_fixtures,
        })
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        // Clear any existing env vars
        env::remove_var("KINSHIP_API_PSK");
        env::remove_var("KINSHIP_BIND_ADDR");
        env::remove_var("KINSHIP_LOG_LEVEL");
        env::remove_var("KINSHIP_LOG_FORMAT");
        env::remove_var("KINSHIP_MOCK_LATENCY_MS");
        env::remove_var("KINSHIP_SEED_FIXTURES");

        let config = Config::from_env().unwrap();

        assert!(config.api_psk.is_none());
        assert_eq!(config.bind_addr.to_string(), "127.0.0.1:8080");
        assert_eq!(config.log_level, "info");
        assert!(!config.log_json);
        assert_eq!(config.mock_latency, Duration::from_millis(1000));
        assert!(config.seed_fixtures);
    }

    #[test]
    fn test_parse_flag() {
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag(" off "), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }
}
