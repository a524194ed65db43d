//! Application configuration

use edebt_client::ClientConfig;
use std::env;

/// Runtime configuration for the office application
///
/// Everything comes from environment variables (a `.env` file is loaded
/// first when present) with workable defaults for local development:
///
/// | Variable                     | Default                 |
/// |------------------------------|-------------------------|
/// | `EDEBT_API_BASE_URL`         | `http://localhost:5000` |
/// | `EDEBT_SESSION_FILE`         | `.edebt/session.json`   |
/// | `EDEBT_LOG_LEVEL`            | `info`                  |
/// | `EDEBT_LOG_DIR`              | unset (stdout only)     |
/// | `EDEBT_ENV`                  | `development`           |
/// | `EDEBT_REQUEST_TIMEOUT_SECS` | `30`                    |
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the receivables API server
    pub api_base_url: String,
    /// Where the logged-in session is persisted
    pub session_file: String,
    /// Log level filter (trace, debug, info, warn, error)
    pub log_level: String,
    /// Directory for daily-rolling log files; stdout only when unset
    pub log_dir: Option<String>,
    /// Runtime environment: development or production
    pub environment: String,
    /// HTTP request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            api_base_url: env::var("EDEBT_API_BASE_URL")
                .unwrap_or_else(|_| "http://localhost:5000".to_string()),
            session_file: env::var("EDEBT_SESSION_FILE")
                .unwrap_or_else(|_| ".edebt/session.json".to_string()),
            log_level: env::var("EDEBT_LOG_LEVEL").unwrap_or_else(|_| "info".to_string()),
            log_dir: env::var("EDEBT_LOG_DIR").ok(),
            environment: env::var("EDEBT_ENV").unwrap_or_else(|_| "development".to_string()),
            request_timeout_secs: env::var("EDEBT_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }

    /// Build a config with explicit server and session locations (tests)
    pub fn with_overrides(
        api_base_url: impl Into<String>,
        session_file: impl Into<String>,
    ) -> Self {
        let mut config = Self::from_env();
        config.api_base_url = api_base_url.into();
        config.session_file = session_file.into();
        config
    }

    /// Client settings for the API server this office talks to
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig::new(&self.api_base_url).with_timeout(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }

    pub fn is_development(&self) -> bool {
        self.environment == "development"
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::from_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_pin_server_and_session() {
        let config = Config::with_overrides("http://127.0.0.1:9000", "/tmp/edebt/session.json");
        assert_eq!(config.api_base_url, "http://127.0.0.1:9000");
        assert_eq!(config.session_file, "/tmp/edebt/session.json");
    }

    #[test]
    fn test_environment_checks() {
        let mut config = Config::with_overrides("http://localhost:5000", "s.json");
        config.environment = "production".to_string();
        assert!(config.is_production());
        assert!(!config.is_development());

        config.environment = "development".to_string();
        assert!(config.is_development());
    }

    #[test]
    fn test_client_config_carries_base_url() {
        let config = Config::with_overrides("http://api.internal:5000", "s.json");
        let client_config = config.client_config();
        assert_eq!(client_config.base_url, "http://api.internal:5000");
    }
}
