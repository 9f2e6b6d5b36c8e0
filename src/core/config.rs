//! Application configuration management
//!
//! Configuration is read from the process environment once at startup and
//! validated before the server binds. A missing access credential is fatal.

use anyhow::{Context, Result};

/// Default OpenWeatherMap API base URL
const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";

/// Default frontend origin allowed by CORS
const DEFAULT_ALLOWED_ORIGIN: &str = "https://lasya-weather-app.vercel.app";

/// Default server port
const DEFAULT_PORT: u16 = 8000;

/// Application configuration loaded from the environment
///
/// All values are resolved at startup so the process fails fast if
/// misconfigured instead of surfacing errors on the first request.
#[derive(Debug, Clone)]
pub struct Config {
    /// OpenWeatherMap access credential (required)
    pub api_key: String,

    /// Upstream API base URL
    pub base_url: String,

    /// The single origin permitted to call this service cross-origin
    pub allowed_origin: String,

    /// Server host address
    pub host: String,

    /// Server port
    pub port: u16,

    /// Logging level
    pub log_level: String,
}

impl Config {
    /// Load configuration from the process environment
    ///
    /// # Errors
    ///
    /// Returns error if `API_KEY` is absent or empty, or if `PORT` is set
    /// but not a valid port number.
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an injectable lookup, so tests can
    /// supply values without touching the process environment.
    fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("API_KEY")
            .filter(|key| !key.is_empty())
            .context("API_KEY is not set")?;

        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT value: {}", raw))?,
            None => DEFAULT_PORT,
        };

        Ok(Config {
            api_key,
            base_url: lookup("OPENWEATHER_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            allowed_origin: lookup("ALLOWED_ORIGIN")
                .unwrap_or_else(|| DEFAULT_ALLOWED_ORIGIN.to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_missing_api_key_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[]));
        assert!(result.is_err());
    }

    #[test]
    fn test_empty_api_key_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[("API_KEY", "")]));
        assert!(result.is_err());
    }

    #[test]
    fn test_defaults_applied() {
        let config = Config::from_lookup(lookup_from(&[("API_KEY", "ow-test-key")])).unwrap();
        assert_eq!(config.api_key, "ow-test-key");
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
        assert_eq!(config.allowed_origin, DEFAULT_ALLOWED_ORIGIN);
        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, DEFAULT_PORT);
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn test_overrides_win_over_defaults() {
        let config = Config::from_lookup(lookup_from(&[
            ("API_KEY", "ow-test-key"),
            ("OPENWEATHER_BASE_URL", "http://127.0.0.1:9999/data/2.5"),
            ("ALLOWED_ORIGIN", "http://localhost:3000"),
            ("HOST", "127.0.0.1"),
            ("PORT", "8082"),
            ("LOG_LEVEL", "debug"),
        ]))
        .unwrap();
        assert_eq!(config.base_url, "http://127.0.0.1:9999/data/2.5");
        assert_eq!(config.allowed_origin, "http://localhost:3000");
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8082);
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_port_is_an_error() {
        let result = Config::from_lookup(lookup_from(&[
            ("API_KEY", "ow-test-key"),
            ("PORT", "not-a-port"),
        ]));
        assert!(result.is_err());
    }
}
