use async_trait::async_trait;
use portfolio_site::models::ProjectSummary;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProjectsError {
    #[error("Failed to fetch projects: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProjectsUseCase: Send + Sync {
    /// Featured projects first, then by name.
    async fn execute(&self) -> Result<Vec<ProjectSummary>, GetProjectsError>;
}
