use std::time::Duration;
use thiserror::Error;

/// Official daily bulletin published by the Czech National Bank.
pub const DEFAULT_BULLETIN_URL: &str = "https://www.cnb.cz/cs/financni-trhy/devizovy-trh/kurzy-devizoveho-trhu/kurzy-devizoveho-trhu/denni_kurz.txt";

/// Environment variable overriding [`ProviderConfig::url`].
pub const URL_ENV: &str = "CNB_RATES_URL";
/// Environment variable overriding [`ProviderConfig::timeout`], in seconds.
pub const TIMEOUT_ENV: &str = "CNB_RATES_TIMEOUT_SECS";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a positive number of seconds, got {value:?}")]
    InvalidTimeout { name: &'static str, value: String },
    #[error("{name} must not be empty")]
    EmptyUrl { name: &'static str },
}

/// Settings for fetching the bulletin over HTTP.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    /// Address of the bulletin text.
    pub url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_BULLETIN_URL.to_string(),
            timeout: Duration::from_secs(30),
        }
    }
}

impl ProviderConfig {
    /// Defaults overridden by `CNB_RATES_URL` and `CNB_RATES_TIMEOUT_SECS`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(url) = lookup(URL_ENV) {
            let url = url.trim();
            if url.is_empty() {
                return Err(ConfigError::EmptyUrl { name: URL_ENV });
            }
            config.url = url.to_string();
        }

        if let Some(value) = lookup(TIMEOUT_ENV) {
            let secs = value
                .trim()
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidTimeout {
                    name: TIMEOUT_ENV,
                    value: value.clone(),
                })?;
            config.timeout = Duration::from_secs(secs);
        }

        Ok(config)
    }
}
