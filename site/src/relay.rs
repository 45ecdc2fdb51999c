//! Outgoing contact messages to the third-party form relay.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{error, warn};

use crate::config::SiteConfig;
use crate::error::ConfigError;
use crate::models::ContactForm;

/// Delivers one contact message. `true` only when the relay accepted it.
#[async_trait]
pub trait FormRelay: Send + Sync {
    async fn submit(&self, form: &ContactForm) -> bool;
}

#[derive(Debug, Clone)]
pub struct FormspreeRelay {
    http: Client,
    endpoint: Option<String>,
}

impl FormspreeRelay {
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(10);

    pub fn new(http: Client, base_url: &str, form_id: &str) -> Self {
        let form_id = form_id.trim();
        let endpoint = (!form_id.is_empty())
            .then(|| format!("{}/{}", base_url.trim_end_matches('/'), form_id));

        Self { http, endpoint }
    }

    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::new(http, &config.relay_base_url, &config.relay_form_id))
    }

    pub fn endpoint(&self) -> Option<&str> {
        self.endpoint.as_deref()
    }
}

#[async_trait]
impl FormRelay for FormspreeRelay {
    async fn submit(&self, form: &ContactForm) -> bool {
        let Some(endpoint) = &self.endpoint else {
            warn!("Form relay has no form id configured; message not sent");
            return false;
        };

        match self.http.post(endpoint).json(form).send().await {
            Ok(response) if response.status().is_success() => true,
            Ok(response) => {
                error!(status = %response.status(), "Form relay rejected message");
                false
            }
            Err(e) => {
                error!(error = %e, "Form relay request failed");
                false
            }
        }
    }
}
