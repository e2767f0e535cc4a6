//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ```bash
//! export APP_ENV="local"                 # local | dev | prod
//! export STORAGE_PATH="./storage/storage.db"
//! export HTTP_ADDRESS="localhost:8080"
//! export HTTP_USER="admin"
//! export HTTP_PASSWORD="secret"
//! ```
//!
//! ## Required Variables
//!
//! - `STORAGE_PATH` - SQLite file path or `sqlite:` URL
//! - `HTTP_USER` / `HTTP_PASSWORD` - Basic auth credentials for mutating routes
//!
//! ## Optional Variables
//!
//! - `APP_ENV` - Environment (default: `local`); selects log format and level
//! - `HTTP_ADDRESS` - Bind address (default: `localhost:8080`)
//! - `HTTP_TIMEOUT` - Request timeout in seconds (default: 4)
//! - `HTTP_IDLE_TIMEOUT` - Idle storage connection lifetime in seconds (default: 60)
//! - `ALIAS_LENGTH` - Length of generated aliases (default: 6)
//! - `ALIAS_GENERATION_ATTEMPTS` - Generated candidates tried per request (default: 1)
//! - `DB_MAX_CONNECTIONS` - Storage pool size (default: 5)
//! - `RUST_LOG` - Overrides the log level chosen by `APP_ENV`

use anyhow::{Context, Result};
use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::AliasPolicy;
use crate::application::services::assignment_service::{
    MAX_ALIAS_LENGTH, MAX_GENERATION_ATTEMPTS,
};
use crate::infrastructure::persistence::PoolSettings;

/// Deployment environment; decides how logs are rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppEnv {
    /// Human-readable logs at `debug`.
    Local,
    /// JSON logs at `debug`.
    Dev,
    /// JSON logs at `info`.
    Prod,
}

impl AppEnv {
    /// Default `EnvFilter` directive when `RUST_LOG` is unset.
    pub fn default_log_level(self) -> &'static str {
        match self {
            AppEnv::Local | AppEnv::Dev => "debug",
            AppEnv::Prod => "info",
        }
    }

    /// Whether logs are emitted as JSON.
    pub fn json_logs(self) -> bool {
        !matches!(self, AppEnv::Local)
    }
}

impl FromStr for AppEnv {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_ascii_lowercase().as_str() {
            "local" => Ok(AppEnv::Local),
            "dev" => Ok(AppEnv::Dev),
            "prod" => Ok(AppEnv::Prod),
            other => anyhow::bail!("APP_ENV must be 'local', 'dev' or 'prod', got '{}'", other),
        }
    }
}

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub app_env: AppEnv,
    pub storage_path: String,
    pub http_address: String,
    /// Per-request timeout applied by the HTTP layer, in seconds.
    pub http_timeout: u64,
    /// Idle lifetime of pooled storage connections, in seconds.
    pub http_idle_timeout: u64,
    pub http_user: String,
    pub http_password: String,
    pub alias_length: usize,
    /// Generated candidates tried before a collision is reported.
    pub alias_generation_attempts: usize,
    pub db_max_connections: u32,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a required variable is missing or `APP_ENV` is unknown.
    pub fn from_env() -> Result<Self> {
        let app_env = env::var("APP_ENV")
            .unwrap_or_else(|_| "local".to_string())
            .parse()?;

        let storage_path = env::var("STORAGE_PATH").context("STORAGE_PATH must be set")?;
        let http_address = env::var("HTTP_ADDRESS").unwrap_or_else(|_| "localhost:8080".to_string());
        let http_user = env::var("HTTP_USER").context("HTTP_USER must be set")?;
        let http_password = env::var("HTTP_PASSWORD").context("HTTP_PASSWORD must be set")?;

        Ok(Self {
            app_env,
            storage_path,
            http_address,
            http_timeout: parse_or("HTTP_TIMEOUT", 4),
            http_idle_timeout: parse_or("HTTP_IDLE_TIMEOUT", 60),
            http_user,
            http_password,
            alias_length: parse_or("ALIAS_LENGTH", 6),
            alias_generation_attempts: parse_or("ALIAS_GENERATION_ATTEMPTS", 1),
            db_max_connections: parse_or("DB_MAX_CONNECTIONS", 5),
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `storage_path`, `http_user` or `http_password` is empty
    /// - `http_address` is not `host:port`
    /// - a timeout is zero
    /// - `alias_length` is outside 1-64
    /// - `alias_generation_attempts` is outside 1-16
    /// - `db_max_connections` is zero
    pub fn validate(&self) -> Result<()> {
        if self.storage_path.is_empty() {
            anyhow::bail!("STORAGE_PATH must not be empty");
        }

        if !self.http_address.contains(':') {
            anyhow::bail!(
                "HTTP_ADDRESS must be in format 'host:port', got '{}'",
                self.http_address
            );
        }

        if self.http_timeout == 0 {
            anyhow::bail!("HTTP_TIMEOUT must be greater than 0");
        }
        if self.http_idle_timeout == 0 {
            anyhow::bail!("HTTP_IDLE_TIMEOUT must be greater than 0");
        }

        if self.http_user.is_empty() || self.http_password.is_empty() {
            anyhow::bail!("HTTP_USER and HTTP_PASSWORD must not be empty");
        }

        if self.alias_length == 0 || self.alias_length > MAX_ALIAS_LENGTH {
            anyhow::bail!(
                "ALIAS_LENGTH must be between 1 and {}, got {}",
                MAX_ALIAS_LENGTH,
                self.alias_length
            );
        }

        if self.alias_generation_attempts == 0
            || self.alias_generation_attempts > MAX_GENERATION_ATTEMPTS
        {
            anyhow::bail!(
                "ALIAS_GENERATION_ATTEMPTS must be between 1 and {}, got {}",
                MAX_GENERATION_ATTEMPTS,
                self.alias_generation_attempts
            );
        }

        if self.db_max_connections == 0 {
            anyhow::bail!("DB_MAX_CONNECTIONS must be at least 1");
        }

        Ok(())
    }

    /// Alias generation settings for the assignment service.
    pub fn alias_policy(&self) -> AliasPolicy {
        AliasPolicy {
            alias_length: self.alias_length,
            generation_attempts: self.alias_generation_attempts,
        }
    }

    /// Storage pool settings.
    pub fn pool_settings(&self) -> PoolSettings {
        PoolSettings {
            max_connections: self.db_max_connections,
            idle_timeout: Duration::from_secs(self.http_idle_timeout),
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.http_timeout)
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Environment: {:?}", self.app_env);
        tracing::info!("  Listen address: {}", self.http_address);
        tracing::info!("  Storage: {}", self.storage_path);
        tracing::info!("  Request timeout: {}s", self.http_timeout);
        tracing::info!("  Auth user: {} (password: ***)", self.http_user);
        tracing::info!(
            "  Generated aliases: length {}, {} attempt(s)",
            self.alias_length,
            self.alias_generation_attempts
        );
    }
}

/// Reads a numeric variable, falling back to `default` when unset or unparsable.
fn parse_or<T: FromStr>(key: &str, default: T) -> T {
    env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

/// Loads only the alias generation settings (`ALIAS_LENGTH`,
/// `ALIAS_GENERATION_ATTEMPTS`) with the same defaults and ranges as
/// [`Config`]. Used by tools that don't serve HTTP.
///
/// # Errors
///
/// Returns an error if either value is out of range.
pub fn alias_policy_from_env() -> Result<AliasPolicy> {
    let alias_length = parse_or("ALIAS_LENGTH", 6);
    let attempts = parse_or("ALIAS_GENERATION_ATTEMPTS", 1);

    AliasPolicy::new(alias_length, attempts)
        .context("ALIAS_LENGTH or ALIAS_GENERATION_ATTEMPTS out of range")
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
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

    const ALL_KEYS: &[&str] = &[
        "APP_ENV",
        "STORAGE_PATH",
        "HTTP_ADDRESS",
        "HTTP_TIMEOUT",
        "HTTP_IDLE_TIMEOUT",
        "HTTP_USER",
        "HTTP_PASSWORD",
        "ALIAS_LENGTH",
        "ALIAS_GENERATION_ATTEMPTS",
        "DB_MAX_CONNECTIONS",
    ];

    fn clear_env() {
        // SAFETY: Tests touching the environment are run serially via #[serial]
        unsafe {
            for key in ALL_KEYS {
                env::remove_var(key);
            }
        }
    }

    fn valid_config() -> Config {
        Config {
            app_env: AppEnv::Local,
            storage_path: "./storage/storage.db".to_string(),
            http_address: "localhost:8080".to_string(),
            http_timeout: 4,
            http_idle_timeout: 60,
            http_user: "admin".to_string(),
            http_password: "secret".to_string(),
            alias_length: 6,
            alias_generation_attempts: 1,
            db_max_connections: 5,
        }
    }

    #[test]
    fn test_app_env_parsing() {
        assert_eq!("local".parse::<AppEnv>().unwrap(), AppEnv::Local);
        assert_eq!("DEV".parse::<AppEnv>().unwrap(), AppEnv::Dev);
        assert_eq!("prod".parse::<AppEnv>().unwrap(), AppEnv::Prod);
        assert!("staging".parse::<AppEnv>().is_err());
    }

    #[test]
    fn test_app_env_logging() {
        assert!(!AppEnv::Local.json_logs());
        assert!(AppEnv::Dev.json_logs());
        assert_eq!(AppEnv::Dev.default_log_level(), "debug");
        assert_eq!(AppEnv::Prod.default_log_level(), "info");
    }

    #[test]
    fn test_config_validation() {
        let mut config = valid_config();
        assert!(config.validate().is_ok());

        config.http_address = "8080".to_string();
        assert!(config.validate().is_err());
        config.http_address = "0.0.0.0:8080".to_string();

        config.alias_length = 0;
        assert!(config.validate().is_err());
        config.alias_length = 65;
        assert!(config.validate().is_err());
        config.alias_length = 8;

        config.alias_generation_attempts = 0;
        assert!(config.validate().is_err());
        config.alias_generation_attempts = 3;

        config.http_timeout = 0;
        assert!(config.validate().is_err());
        config.http_timeout = 4;

        config.http_password = String::new();
        assert!(config.validate().is_err());
        config.http_password = "secret".to_string();

        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_derived_settings() {
        let config = valid_config();

        assert_eq!(
            config.alias_policy(),
            AliasPolicy {
                alias_length: 6,
                generation_attempts: 1
            }
        );
        assert_eq!(config.request_timeout(), Duration::from_secs(4));
        assert_eq!(config.pool_settings().max_connections, 5);
        assert_eq!(config.pool_settings().idle_timeout, Duration::from_secs(60));
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        clear_env();
        unsafe {
            env::set_var("STORAGE_PATH", "/tmp/aliases.db");
            env::set_var("HTTP_USER", "admin");
            env::set_var("HTTP_PASSWORD", "secret");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.app_env, AppEnv::Local);
        assert_eq!(config.storage_path, "/tmp/aliases.db");
        assert_eq!(config.http_address, "localhost:8080");
        assert_eq!(config.http_timeout, 4);
        assert_eq!(config.alias_length, 6);
        assert_eq!(config.alias_generation_attempts, 1);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        clear_env();
        unsafe {
            env::set_var("APP_ENV", "prod");
            env::set_var("STORAGE_PATH", "sqlite://data/aliases.db");
            env::set_var("HTTP_ADDRESS", "0.0.0.0:9000");
            env::set_var("HTTP_USER", "admin");
            env::set_var("HTTP_PASSWORD", "secret");
            env::set_var("ALIAS_LENGTH", "10");
            env::set_var("ALIAS_GENERATION_ATTEMPTS", "4");
            env::set_var("HTTP_TIMEOUT", "not-a-number");
        }

        let config = load_from_env().unwrap();

        assert_eq!(config.app_env, AppEnv::Prod);
        assert_eq!(config.http_address, "0.0.0.0:9000");
        assert_eq!(config.alias_length, 10);
        assert_eq!(config.alias_generation_attempts, 4);
        // Unparsable values fall back to the default
        assert_eq!(config.http_timeout, 4);

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_storage_path() {
        clear_env();
        unsafe {
            env::set_var("HTTP_USER", "admin");
            env::set_var("HTTP_PASSWORD", "secret");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("STORAGE_PATH"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_from_env_requires_credentials() {
        clear_env();
        unsafe {
            env::set_var("STORAGE_PATH", "/tmp/aliases.db");
        }

        let err = Config::from_env().unwrap_err();
        assert!(err.to_string().contains("HTTP_USER"));

        clear_env();
    }

    #[test]
    #[serial]
    fn test_alias_policy_from_env() {
        clear_env();

        assert_eq!(alias_policy_from_env().unwrap(), AliasPolicy::default());

        unsafe {
            env::set_var("ALIAS_LENGTH", "8");
            env::set_var("ALIAS_GENERATION_ATTEMPTS", "3");
        }
        assert_eq!(
            alias_policy_from_env().unwrap(),
            AliasPolicy {
                alias_length: 8,
                generation_attempts: 3
            }
        );

        unsafe {
            env::set_var("ALIAS_LENGTH", "0");
        }
        assert!(alias_policy_from_env().is_err());

        clear_env();
    }
}
