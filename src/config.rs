use std::env;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: '{value}'")]
    InvalidValue { key: &'static str, value: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: String,
    pub app_name: String,
    pub data_dir: PathBuf,
    pub allowed_origins: Vec<String>,
    pub formspree_url: String,
    pub formspree_form_id: String,
    pub relay_timeout: Duration,
    pub log_format: LogFormat,
}

impl AppConfig {
    pub const DEFAULT_ALLOWED_ORIGINS: &'static str = "http://localhost:5173,http://127.0.0.1:5173";

    /// Reads configuration from the process environment. Call after the
    /// `.env` files have been loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let port = match var("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "PORT",
                    value: raw,
                })?,
            None => 8000,
        };

        let relay_timeout_secs = match var("RELAY_TIMEOUT_SECS") {
            Some(raw) => raw
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidValue {
                    key: "RELAY_TIMEOUT_SECS",
                    value: raw,
                })?,
            None => 10,
        };

        let log_format = match var("LOG_FORMAT").as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => {
                return Err(ConfigError::InvalidValue {
                    key: "LOG_FORMAT",
                    value: other.to_string(),
                })
            }
        };

        Ok(Self {
            host: var("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            environment: var("RUST_ENV").unwrap_or_else(|| "development".to_string()),
            app_name: var("APP_NAME").unwrap_or_else(|| "Portfolio API".to_string()),
            data_dir: PathBuf::from(var("DATA_DIR").unwrap_or_else(|| "data".to_string())),
            allowed_origins: parse_origins(
                &var("ALLOWED_ORIGINS")
                    .unwrap_or_else(|| Self::DEFAULT_ALLOWED_ORIGINS.to_string()),
            ),
            formspree_url: var("FORMSPREE_URL")
                .unwrap_or_else(|| "https://formspree.io/f".to_string()),
            formspree_form_id: var("FORMSPREE_FORM_ID").unwrap_or_default(),
            relay_timeout: Duration::from_secs(relay_timeout_secs),
            log_format,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}
