use reqwest::Url;
use std::time::Duration;
use thiserror::Error;
use tracing::info;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_EVENT_ID: &str = "9e9bd979-9d10-4915-b339-3786b1634f33";
pub const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Invalid API URL '{value}': {reason}")]
    InvalidApiUrl { value: String, reason: String },
    #[error("Event id must not be empty")]
    EmptyEventId,
    #[error("Invalid request timeout '{0}': expected a positive number of seconds")]
    InvalidTimeout(String),
}

/// Application configuration
/// In debug builds: loads .env first, then the process environment
/// In release builds: process environment only
#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the pass.in API (scheme, host and port)
    pub api_url: Url,
    /// Event whose attendees are listed
    pub event_id: String,
    /// Upper bound for a single attendees request
    pub request_timeout: Duration,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: Url::parse(DEFAULT_API_URL).expect("default API URL is valid"),
            event_id: DEFAULT_EVENT_ID.to_string(),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl Config {
    /// Load configuration based on build mode
    pub fn load() -> Result<Self, ConfigError> {
        #[cfg(debug_assertions)]
        {
            if dotenvy::dotenv().is_ok() {
                info!("Dev mode activated - loaded .env file");
            } else {
                info!("No .env file found, using process environment");
            }
        }

        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(raw) = lookup("PASS_IN_API_URL") {
            config.api_url = parse_api_url(&raw)?;
        }

        if let Some(event_id) = lookup("PASS_IN_EVENT_ID") {
            let event_id = event_id.trim();
            if event_id.is_empty() {
                return Err(ConfigError::EmptyEventId);
            }
            config.event_id = event_id.to_string();
        }

        if let Some(raw) = lookup("PASS_IN_REQUEST_TIMEOUT_SECS") {
            let secs = raw
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout(raw.clone()))?;
            config.request_timeout = Duration::from_secs(secs);
        }

        info!(
            "Attendees API: {} (event {}, timeout {:?})",
            config.api_url, config.event_id, config.request_timeout
        );

        Ok(config)
    }
}

fn parse_api_url(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidApiUrl {
        value: raw.to_string(),
        reason: e.to_string(),
    })?;

    if url.cannot_be_a_base() || !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::InvalidApiUrl {
            value: raw.to_string(),
            reason: "expected an http(s) base URL".to_string(),
        });
    }

    Ok(url)
}
