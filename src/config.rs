//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Database
//!
//! ```bash
//! export DATABASE_URL="sqlite://data/urls.sqlite"
//! # or just a file path
//! export DB_PATH="data/urls.sqlite"
//! ```
//!
//! `DATABASE_URL` wins when both are set. With neither, `data.sqlite` in the
//! working directory is used and created on first start.
//!
//! ## Optional Variables
//!
//! - `PORT` - Listen port (default: `3000`)
//! - `HOST` - Listen interface (default: `0.0.0.0`)
//! - `BASE_HOST` - Prefix of issued short URLs (default: `http://localhost:<PORT>`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `RATE_LIMIT_PER_MINUTE` - Requests per client per minute (default: 20)
//! - `BEHIND_PROXY` - Take the client IP from forwarding headers (default: false)
//! - `DB_MAX_CONNECTIONS` - Pool size (default: 5)
//! - `DB_CONNECT_TIMEOUT` - Pool acquire timeout in seconds (default: 30)

use anyhow::{Context, Result};
use std::env;

/// Default SQLite file when neither `DATABASE_URL` nor `DB_PATH` is set.
const DEFAULT_DB_PATH: &str = "data.sqlite";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL (`sqlite://...` or `sqlite::memory:`).
    pub database_url: String,
    pub listen_addr: String,
    /// Scheme and host prefix of issued short URLs, without a trailing `/`.
    pub base_host: String,
    pub log_level: String,
    pub log_format: String,
    /// Requests allowed per client per minute.
    pub rate_limit_per_minute: u32,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    /// Maximum number of connections in the pool (`DB_MAX_CONNECTIONS`, default: 5).
    pub db_max_connections: u32,
    /// Timeout for acquiring a connection from the pool in seconds
    /// (`DB_CONNECT_TIMEOUT`, default: 30).
    pub db_connect_timeout: u64,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `PORT` is set but is not a valid port number.
    pub fn from_env() -> Result<Self> {
        let database_url = Self::load_database_url();

        let port: u16 = match env::var("PORT") {
            Ok(v) => v
                .parse()
                .with_context(|| format!("PORT must be a port number, got '{v}'"))?,
            Err(_) => 3000,
        };
        let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let listen_addr = format!("{host}:{port}");

        let base_host = env::var("BASE_HOST")
            .unwrap_or_else(|_| format!("http://localhost:{port}"))
            .trim_end_matches('/')
            .to_string();

        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let rate_limit_per_minute = env::var("RATE_LIMIT_PER_MINUTE")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(20);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let db_max_connections = env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(5);

        let db_connect_timeout = env::var("DB_CONNECT_TIMEOUT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(30);

        Ok(Self {
            database_url,
            listen_addr,
            base_host,
            log_level,
            log_format,
            rate_limit_per_minute,
            behind_proxy,
            db_max_connections,
            db_connect_timeout,
        })
    }

    /// Resolves the SQLite URL.
    ///
    /// Priority:
    /// 1. `DATABASE_URL` environment variable
    /// 2. `sqlite://` + `DB_PATH`
    /// 3. `sqlite://data.sqlite`
    fn load_database_url() -> String {
        if let Ok(url) = env::var("DATABASE_URL") {
            return url;
        }

        let path = env::var("DB_PATH").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
        format!("sqlite://{path}")
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `database_url` is not a SQLite URL
    /// - `base_host` is not an http(s) prefix
    /// - `rate_limit_per_minute` is outside 1..=10000
    /// - pool settings are zero
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "Listen address must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.database_url.starts_with("sqlite:") {
            anyhow::bail!(
                "DATABASE_URL must start with 'sqlite:', got '{}'",
                self.database_url
            );
        }

        if !self.base_host.starts_with("http://") && !self.base_host.starts_with("https://") {
            anyhow::bail!(
                "BASE_HOST must start with 'http://' or 'https://', got '{}'",
                self.base_host
            );
        }

        if self.rate_limit_per_minute == 0 || self.rate_limit_per_minute > 10_000 {
            anyhow::bail!(
                "RATE_LIMIT_PER_MINUTE must be between 1 and 10000, got {}",
                self.rate_limit_per_minute
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }
        if self.db_connect_timeout == 0 {
            anyhow::bail!("DB_CONNECT_TIMEOUT must be greater than 0");
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base host: {}", self.base_host);
        tracing::info!("  Database: {}", self.database_url);
        tracing::info!(
            "  Rate limit: {} req/min per client{}",
            self.rate_limit_per_minute,
            if self.behind_proxy {
                " (behind proxy)"
            } else {
                ""
            }
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if a variable is malformed or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    const VARS: &[&str] = &[
        "DATABASE_URL",
        "DB_PATH",
        "PORT",
        "HOST",
        "BASE_HOST",
        "RATE_LIMIT_PER_MINUTE",
        "BEHIND_PROXY",
        "LOG_FORMAT",
        "DB_MAX_CONNECTIONS",
        "DB_CONNECT_TIMEOUT",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially
        unsafe {
            for var in VARS {
                env::remove_var(var);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            database_url: "sqlite://test.sqlite".to_string(),
            listen_addr: "0.0.0.0:3000".to_string(),
            base_host: "https://s.example.com".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            rate_limit_per_minute: 20,
            behind_proxy: false,
            db_max_connections: 5,
            db_connect_timeout: 30,
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());

        config.listen_addr = "0.0.0.0:3000".to_string();

        config.database_url = "postgres://localhost/test".to_string();
        assert!(config.validate().is_err());

        config.database_url = "sqlite::memory:".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_base_host() {
        let mut config = valid_config();

        config.base_host = "s.example.com".to_string();
        assert!(config.validate().is_err());

        config.base_host = "http://localhost:3000".to_string();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_validation_rate_limit() {
        let mut config = valid_config();

        config.rate_limit_per_minute = 0;
        assert!(config.validate().is_err());

        config.rate_limit_per_minute = 10_001;
        assert!(config.validate().is_err());

        config.rate_limit_per_minute = 1;
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_defaults() {
        clear_env();

        let config = Config::from_env().unwrap();

        assert_eq!(config.database_url, "sqlite://data.sqlite");
        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.base_host, "http://localhost:3000");
        assert_eq!(config.rate_limit_per_minute, 20);
        assert!(!config.behind_proxy);
        assert!(config.validate().is_ok());
    }

    #[test]
    #[serial]
    fn test_port_and_base_host_from_env() {
        clear_env();
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("PORT", "8080");
            env::set_var("BASE_HOST", "https://sho.rt/");
            env::set_var("BEHIND_PROXY", "true");
        }

        let config = Config::from_env().unwrap();

        assert_eq!(config.listen_addr, "0.0.0.0:8080");
        assert_eq!(config.base_host, "https://sho.rt");
        assert!(config.behind_proxy);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_invalid_port_is_error() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("PORT", "not-a-port");
        }

        assert!(Config::from_env().is_err());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_db_path_builds_sqlite_url() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DB_PATH", "/var/lib/shorturl/urls.sqlite");
        }

        let config = Config::from_env().unwrap();
        assert_eq!(config.database_url, "sqlite:///var/lib/shorturl/urls.sqlite");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_database_url_priority() {
        clear_env();
        // SAFETY: Tests are run serially
        unsafe {
            env::set_var("DATABASE_URL", "sqlite://from-url.sqlite");
            env::set_var("DB_PATH", "from-path.sqlite");
        }

        let url = Config::load_database_url();

        assert!(url.contains("from-url"));
        assert!(!url.contains("from-path"));

        clear_env();
    }
}
