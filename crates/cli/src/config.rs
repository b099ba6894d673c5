//! CLI configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `TIME_RUSH_DATA_DIR` - Directory holding the store files (default: .time-rush)
//! - `TIME_RUSH_ADMIN_PASSWORD` - Admin password for admin commands
//! - `TIME_RUSH_LOG_FORMAT` - `pretty` or `json` (default: pretty)
//! - `RUST_LOG` - Log filter (default: info)

use std::path::PathBuf;

use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_DATA_DIR: &str = ".time-rush";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Log output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pretty" | "" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(format!("expected `pretty` or `json`, got `{other}`")),
        }
    }
}

/// CLI configuration.
#[derive(Debug, Clone)]
pub struct CliConfig {
    /// Directory of the file-backed store
    pub data_dir: PathBuf,
    /// Admin password used to log in for admin commands
    pub admin_password: Option<SecretString>,
    /// Log output format
    pub log_format: LogFormat,
}

impl CliConfig {
    /// Load configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let data_dir = PathBuf::from(get_env_or_default("TIME_RUSH_DATA_DIR", DEFAULT_DATA_DIR));
        let admin_password = get_optional_env("TIME_RUSH_ADMIN_PASSWORD").map(SecretString::from);
        let log_format = get_env_or_default("TIME_RUSH_LOG_FORMAT", "pretty")
            .parse::<LogFormat>()
            .map_err(|e| ConfigError::InvalidEnvVar("TIME_RUSH_LOG_FORMAT".to_string(), e))?;

        Ok(Self {
            data_dir,
            admin_password,
            log_format,
        })
    }
}

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    get_optional_env(key).unwrap_or_else(|| default.to_string())
}
