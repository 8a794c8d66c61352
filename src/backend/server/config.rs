//! Server Configuration
//!
//! Configuration is layered:
//!
//! 1. Built-in defaults (suitable for local development)
//! 2. An optional TOML file named by `DREAMS_CONFIG`
//! 3. Environment variables, which win over both
//!
//! # Environment Variables
//!
//! | Variable | Field |
//! |---|---|
//! | `SERVER_PORT` | `port` |
//! | `DREAMS_DATA_PATH` | `data_path` (empty string = memory only) |
//! | `JWT_SECRET` | `jwt_secret` |
//! | `DREAMS_TOKEN_TTL_SECS` | `token_ttl_secs` |
//! | `DREAMS_BCRYPT_COST` | `bcrypt_cost` |
//! | `DREAMS_ENABLE_CLEAR` | `enable_clear` |
//! | `SMTP_HOST`, `SMTP_PORT`, `SMTP_USERNAME`, `SMTP_PASSWORD`, `SMTP_FROM` | `smtp` |

use std::path::PathBuf;
use std::str::FromStr;

use serde::Deserialize;
use thiserror::Error;

const DEFAULT_JWT_SECRET: &str = "dreams-development-secret-change-me";

/// Errors raised while assembling the configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: String, value: String },
}

/// Outgoing mail server settings
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SmtpConfig {
    pub host: String,
    #[serde(default = "default_smtp_port")]
    pub port: u16,
    pub username: String,
    pub password: String,
    /// Sender address for password reset mail
    pub from: String,
}

fn default_smtp_port() -> u16 {
    587
}

/// Complete server configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub port: u16,
    /// Snapshot file; `None` keeps the store in memory
    pub data_path: Option<PathBuf>,
    pub jwt_secret: String,
    pub token_ttl_secs: u64,
    pub bcrypt_cost: u32,
    /// Route `DELETE /clear`
    pub enable_clear: bool,
    /// Password reset mail is only logged when unset
    pub smtp: Option<SmtpConfig>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: 3000,
            data_path: Some(PathBuf::from("data/dreams.json")),
            jwt_secret: DEFAULT_JWT_SECRET.to_string(),
            token_ttl_secs: 30 * 24 * 60 * 60,
            bcrypt_cost: bcrypt::DEFAULT_COST,
            enable_clear: false,
            smtp: None,
        }
    }
}

impl ServerConfig {
    /// Build the configuration from defaults, `DREAMS_CONFIG` and the environment
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the config file cannot be read or parsed, or
    /// if an environment variable holds a value of the wrong type.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = match std::env::var("DREAMS_CONFIG") {
            Ok(path) => Self::from_file(PathBuf::from(path))?,
            Err(_) => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;

        if config.jwt_secret == DEFAULT_JWT_SECRET {
            tracing::warn!("JWT_SECRET not set, using the development secret");
        }
        Ok(config)
    }

    /// Parse a TOML config file; missing keys take their defaults
    pub fn from_file(path: PathBuf) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(&path).map_err(|source| ConfigError::Read {
            path: path.clone(),
            source,
        })?;
        Self::from_toml(&text).map_err(|source| ConfigError::Parse { path, source })
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }

    /// Override fields from a variable lookup
    ///
    /// Takes the lookup as a closure so tests do not have to touch the
    /// process environment.
    pub fn apply_env(
        &mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(port) = parse_var(&lookup, "SERVER_PORT")? {
            self.port = port;
        }
        if let Some(path) = lookup("DREAMS_DATA_PATH") {
            self.data_path = if path.is_empty() {
                None
            } else {
                Some(PathBuf::from(path))
            };
        }
        if let Some(secret) = lookup("JWT_SECRET") {
            self.jwt_secret = secret;
        }
        if let Some(ttl) = parse_var(&lookup, "DREAMS_TOKEN_TTL_SECS")? {
            self.token_ttl_secs = ttl;
        }
        if let Some(cost) = parse_var(&lookup, "DREAMS_BCRYPT_COST")? {
            self.bcrypt_cost = cost;
        }
        if let Some(enable) = parse_var(&lookup, "DREAMS_ENABLE_CLEAR")? {
            self.enable_clear = enable;
        }
        if let Some(host) = lookup("SMTP_HOST") {
            let port = parse_var(&lookup, "SMTP_PORT")?.unwrap_or_else(default_smtp_port);
            let username = lookup("SMTP_USERNAME").unwrap_or_default();
            self.smtp = Some(SmtpConfig {
                host,
                port,
                from: lookup("SMTP_FROM").unwrap_or_else(|| username.clone()),
                password: lookup("SMTP_PASSWORD").unwrap_or_default(),
                username,
            });
        }
        Ok(())
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
) -> Result<Option<T>, ConfigError> {
    match lookup(key) {
        None => Ok(None),
        Some(value) => value
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| ConfigError::InvalidValue {
                key: key.to_string(),
                value,
            }),
    }
}
