use async_trait::async_trait;
use portfolio_site::models::ProjectDetail;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetSingleProjectError {
    #[error("Project not found")]
    NotFound,

    #[error("Failed to fetch project: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetSingleProjectUseCase: Send + Sync {
    async fn execute(&self, project_id: &str) -> Result<ProjectDetail, GetSingleProjectError>;
}
