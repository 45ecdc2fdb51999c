use async_trait::async_trait;
use portfolio_site::models::Experience;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetExperiencesError {
    #[error("Failed to fetch experiences: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetExperiencesUseCase: Send + Sync {
    /// Current positions first, then most recent start date.
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError>;
}
