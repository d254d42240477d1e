//! services/api/src/config.rs
//!
//! Defines the application's configuration structure and loading logic.
//!
//! All configuration is loaded from environment variables at startup. The `.env`
//! file is used for local development.

use std::fmt;
use std::net::SocketAddr;
use std::time::Duration;
use tracing::Level;

/// A custom error type for configuration loading failures.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing the environment variable {0}")]
    MissingVar(String),
    #[error("Invalid value for the environment variable {0}: {1}")]
    InvalidValue(String, String),
}

/// The text generation backend, chosen at deploy time, with its credential.
#[derive(Clone, PartialEq, Eq)]
pub enum ProviderConfig {
    OpenAi { api_key: String },
    Gemini { api_key: String },
    /// Canned replies, no network. For local development only.
    Stub,
}

impl ProviderConfig {
    pub fn name(&self) -> &'static str {
        match self {
            ProviderConfig::OpenAi { .. } => "openai",
            ProviderConfig::Gemini { .. } => "gemini",
            ProviderConfig::Stub => "stub",
        }
    }

    fn default_model(&self) -> &'static str {
        match self {
            ProviderConfig::OpenAi { .. } => "gpt-4o-mini",
            ProviderConfig::Gemini { .. } => "gemini-1.5-flash",
            ProviderConfig::Stub => "stub",
        }
    }
}

// Keys must never end up in logs.
impl fmt::Debug for ProviderConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProviderConfig::OpenAi { .. } => f.write_str("OpenAi { api_key: <redacted> }"),
            ProviderConfig::Gemini { .. } => f.write_str("Gemini { api_key: <redacted> }"),
            ProviderConfig::Stub => f.write_str("Stub"),
        }
    }
}

/// Holds all configuration loaded from the environment at startup.
#[derive(Clone, Debug)]
pub struct Config {
    pub bind_address: SocketAddr,
    pub log_level: Level,
    pub provider: ProviderConfig,
    pub generation_model: String,
    pub generation_timeout: Duration,
    pub cors_allowed_origin: Option<String>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// It will look for a `.env` file in the current directory for development,
    /// but this is skipped in test environments to ensure tests are hermetic.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Only load from .env in non-test mode to avoid contamination.
        if !cfg!(test) {
            dotenvy::dotenv().ok();
        }
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    ///
    /// Fails when the selected provider's credential is absent or blank, so a
    /// misconfigured deployment never starts serving.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // --- Load Server Settings ---
        let bind_address_str = lookup("BIND_ADDRESS").unwrap_or_else(|| "0.0.0.0:3000".to_string());
        let bind_address = bind_address_str.parse::<SocketAddr>().map_err(|e| {
            ConfigError::InvalidValue("BIND_ADDRESS".to_string(), e.to_string())
        })?;

        let log_level_str = lookup("RUST_LOG").unwrap_or_else(|| "INFO".to_string());
        let log_level = log_level_str.parse::<Level>().map_err(|_| {
            ConfigError::InvalidValue(
                "RUST_LOG".to_string(),
                format!("'{}' is not a valid log level", log_level_str),
            )
        })?;

        let cors_allowed_origin = lookup("CORS_ALLOWED_ORIGIN").filter(|v| !v.trim().is_empty());

        // --- Load Provider Settings ---
        let required_key = |name: &str| {
            lookup(name)
                .filter(|v| !v.trim().is_empty())
                .ok_or_else(|| ConfigError::MissingVar(name.to_string()))
        };
        let provider_str = lookup("GENERATION_PROVIDER").unwrap_or_else(|| "openai".to_string());
        let provider = match provider_str.trim().to_lowercase().as_str() {
            "openai" => ProviderConfig::OpenAi {
                api_key: required_key("OPENAI_API_KEY")?,
            },
            "gemini" => ProviderConfig::Gemini {
                api_key: required_key("GEMINI_API_KEY")?,
            },
            "stub" => ProviderConfig::Stub,
            _ => {
                return Err(ConfigError::InvalidValue(
                    "GENERATION_PROVIDER".to_string(),
                    format!("'{}' is not one of openai, gemini, stub", provider_str),
                ))
            }
        };

        let generation_model = lookup("GENERATION_MODEL")
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| provider.default_model().to_string());

        let timeout_str = lookup("GENERATION_TIMEOUT_SECS").unwrap_or_else(|| "30".to_string());
        let generation_timeout = match timeout_str.trim().parse::<u64>() {
            Ok(secs) if secs > 0 => Duration::from_secs(secs),
            _ => {
                return Err(ConfigError::InvalidValue(
                    "GENERATION_TIMEOUT_SECS".to_string(),
                    format!("'{}' is not a positive number of seconds", timeout_str),
                ))
            }
        };

        Ok(Self {
            bind_address,
            log_level,
            provider,
            generation_model,
            generation_timeout,
            cors_allowed_origin,
        })
    }
}
