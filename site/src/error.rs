use thiserror::Error;

/// Why a section's data could not be loaded.
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("Request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Unexpected status {status} from {url}")]
    Status { status: u16, url: String },

    #[error("API error {code}: {message}")]
    Api { code: String, message: String },

    #[error("Response had no data")]
    EmptyBody,
}

#[derive(Debug, Error)]
pub enum PreferencesError {
    #[error("Failed to read or write preferences: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid preferences file: {0}")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    InvalidValue { key: &'static str, value: String },

    #[error("Failed to build HTTP client: {0}")]
    Client(#[from] reqwest::Error),
}
