//! Configuration from the process environment (after `.env` has been merged in).

use std::env;
use std::time::Duration;

pub const API_KEY_VAR: &str = "VENICE_API_KEY";
pub const BASE_URL_VAR: &str = "VENICE_API_BASE_URL";
pub const TIMEOUT_VAR: &str = "VENICE_API_TIMEOUT_SECS";

pub const DEFAULT_BASE_URL: &str = "https://api.venice.ai/api/v1";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: String,
    pub base_url: String,
    /// Request timeout. `None` leaves the HTTP client's default (no timeout).
    pub timeout: Option<Duration>,
}

impl Config {
    pub fn new(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Full URL of the models endpoint. Plain concatenation, no slash normalization.
    pub fn models_url(&self) -> String {
        format!("{}/models", self.base_url)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("VENICE_API_KEY not found in environment variables")]
    MissingApiKey,
}

impl ConfigError {
    /// Follow-up line printed after the error itself.
    pub fn hint(&self) -> &'static str {
        match self {
            ConfigError::MissingApiKey => {
                "Please make sure you have set your Venice AI API key in the .env file"
            }
        }
    }
}

/// Load configuration from environment. Returns an error if the API key is missing or empty.
pub fn load() -> Result<Config, ConfigError> {
    load_from(|name| env::var(name).ok())
}

/// Load configuration through an arbitrary variable lookup.
pub fn load_from<F>(lookup: F) -> Result<Config, ConfigError>
where
    F: Fn(&str) -> Option<String>,
{
    let api_key = lookup(API_KEY_VAR)
        .filter(|k| !k.is_empty())
        .ok_or(ConfigError::MissingApiKey)?;

    // Set-but-empty is kept as an override; only an unset variable gets the default
    let base_url = lookup(BASE_URL_VAR).unwrap_or_else(|| DEFAULT_BASE_URL.to_string());

    let timeout = lookup(TIMEOUT_VAR).and_then(|raw| parse_timeout(&raw));

    Ok(Config {
        timeout,
        ..Config::new(api_key, base_url)
    })
}

fn parse_timeout(raw: &str) -> Option<Duration> {
    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Some(Duration::from_secs(secs)),
        _ => {
            log::warn!("Ignoring invalid {}={:?}; expected a positive integer", TIMEOUT_VAR, raw);
            None
        }
    }
}
