//! HTTP client for the portfolio data API.

use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::debug;

use crate::config::SiteConfig;
use crate::error::{ConfigError, FetchError};
use crate::models::{ExperiencesResponse, ProjectDetail, ProjectsResponse, Profile, StackResponse};

#[derive(Debug, Deserialize)]
struct Envelope<T> {
    success: bool,
    data: Option<T>,
    error: Option<EnvelopeError>,
}

#[derive(Debug, Deserialize)]
struct EnvelopeError {
    code: String,
    message: String,
}

#[derive(Debug, Clone)]
pub struct PortfolioClient {
    http: Client,
    base_url: String,
}

impl PortfolioClient {
    pub fn new(http: Client, base_url: impl Into<String>) -> Self {
        Self {
            http,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client with the configured base URL and request timeout.
    pub fn from_config(config: &SiteConfig) -> Result<Self, ConfigError> {
        let http = Client::builder().timeout(config.request_timeout).build()?;
        Ok(Self::new(http, config.api_base_url.clone()))
    }

    pub async fn about(&self) -> Result<Profile, FetchError> {
        self.get("/api/about").await
    }

    pub async fn projects(&self) -> Result<ProjectsResponse, FetchError> {
        self.get("/api/projects").await
    }

    pub async fn project(&self, id: &str) -> Result<ProjectDetail, FetchError> {
        self.get(&format!("/api/projects/{id}")).await
    }

    pub async fn stack(&self) -> Result<StackResponse, FetchError> {
        self.get("/api/stack").await
    }

    pub async fn experiences(&self) -> Result<ExperiencesResponse, FetchError> {
        self.get("/api/experiences").await
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, FetchError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(%url, "Fetching portfolio data");

        let response = self.http.get(&url).send().await?;
        let status = response.status();

        if !status.is_success() {
            // Error bodies are envelopes too; fall back to the bare status.
            return match response.json::<Envelope<serde_json::Value>>().await {
                Ok(Envelope {
                    error: Some(error), ..
                }) => Err(FetchError::Api {
                    code: error.code,
                    message: error.message,
                }),
                _ => Err(FetchError::Status {
                    status: status.as_u16(),
                    url,
                }),
            };
        }

        let envelope = response.json::<Envelope<T>>().await?;
        match envelope {
            Envelope {
                success: true,
                data: Some(data),
                ..
            } => Ok(data),
            Envelope {
                error: Some(error), ..
            } => Err(FetchError::Api {
                code: error.code,
                message: error.message,
            }),
            _ => Err(FetchError::EmptyBody),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::load_state::{LoadState, Resource};
    use serde_json::json;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn profile_json() -> serde_json::Value {
        json!({
            "name": "Test Silva",
            "title": "Developer",
            "location": "São Paulo, SP",
            "email": "test@example.com",
            "phone": "(11) 99999-9999",
            "github": "https://github.com/test",
            "linkedin": "https://linkedin.com/in/test",
            "description": "Test description",
            "availability": "Remote"
        })
    }

    #[tokio::test]
    async fn unwraps_success_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/about"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "success": true, "data": profile_json() })),
            )
            .mount(&server)
            .await;

        let client = PortfolioClient::new(Client::new(), format!("{}/", server.uri()));
        let profile = client.about().await.unwrap();

        assert_eq!(profile.name, "Test Silva");
        assert_eq!(profile.availability, "Remote");
    }

    #[tokio::test]
    async fn not_found_envelope_becomes_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/projects/missing"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({
                "success": false,
                "error": { "code": "PROJECT_NOT_FOUND", "message": "Project not found" }
            })))
            .mount(&server)
            .await;

        let client = PortfolioClient::new(Client::new(), server.uri());
        let err = client.project("missing").await.unwrap_err();

        match err {
            FetchError::Api { code, .. } => assert_eq!(code, "PROJECT_NOT_FOUND"),
            other => panic!("Expected Api error, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn non_json_failure_reports_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/stack"))
            .respond_with(ResponseTemplate::new(503).set_body_string("unavailable"))
            .mount(&server)
            .await;

        let client = PortfolioClient::new(Client::new(), server.uri());
        let err = client.stack().await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 503, .. }));
    }

    #[tokio::test]
    async fn failed_fetch_settles_resource_as_failed() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/api/experiences"))
            .respond_with(ResponseTemplate::new(500))
            .expect(1)
            .mount(&server)
            .await;

        let client = PortfolioClient::new(Client::new(), server.uri());
        let mut resource = Resource::spawn(move || async move { client.experiences().await });

        let state = resource.settled().await;
        assert!(matches!(state, LoadState::Failed(_)));
    }
}
