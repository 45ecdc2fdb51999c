use std::env;
use std::path::PathBuf;
use std::time::Duration;

use crate::error::ConfigError;
use crate::preferences::Preferences;

#[derive(Debug, Clone)]
pub struct SiteConfig {
    pub api_base_url: String,
    pub relay_base_url: String,
    pub relay_form_id: String,
    pub request_timeout: Duration,
    pub preferences_path: PathBuf,
}

impl SiteConfig {
    pub const DEFAULT_API_BASE_URL: &'static str = "http://localhost:8000";
    pub const DEFAULT_RELAY_BASE_URL: &'static str = "https://formspree.io/f";
    pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

    /// Load site configuration from environment variables, reading `.env` first
    /// when present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let timeout_secs = match env::var("REQUEST_TIMEOUT_SECS") {
            Ok(raw) => raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "REQUEST_TIMEOUT_SECS",
                    value: raw.clone(),
                })?,
            Err(_) => Self::DEFAULT_TIMEOUT_SECS,
        };

        Ok(Self {
            api_base_url: non_empty_var("PORTFOLIO_API_URL")
                .unwrap_or_else(|| Self::DEFAULT_API_BASE_URL.to_string()),
            relay_base_url: non_empty_var("FORMSPREE_URL")
                .unwrap_or_else(|| Self::DEFAULT_RELAY_BASE_URL.to_string()),
            relay_form_id: non_empty_var("FORMSPREE_FORM_ID").unwrap_or_default(),
            request_timeout: Duration::from_secs(timeout_secs),
            preferences_path: non_empty_var("PREFERENCES_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(Preferences::default_path),
        })
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            api_base_url: Self::DEFAULT_API_BASE_URL.to_string(),
            relay_base_url: Self::DEFAULT_RELAY_BASE_URL.to_string(),
            relay_form_id: String::new(),
            request_timeout: Duration::from_secs(Self::DEFAULT_TIMEOUT_SECS),
            preferences_path: Preferences::default_path(),
        }
    }
}

fn non_empty_var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
