use async_trait::async_trait;
use portfolio_site::models::{Experience, ProjectDetail, Profile, SkillItem};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PortfolioRepositoryError {
    #[error("Failed to read {source_name}: {message}")]
    ReadFailed {
        source_name: String,
        message: String,
    },

    #[error("Invalid data in {source_name}: {message}")]
    InvalidData {
        source_name: String,
        message: String,
    },
}

/// Read-only access to the portfolio content.
#[async_trait]
pub trait PortfolioRepository: Send + Sync {
    async fn get_profile(&self) -> Result<Profile, PortfolioRepositoryError>;

    async fn get_projects(&self) -> Result<Vec<ProjectDetail>, PortfolioRepositoryError>;

    async fn get_project_by_id(
        &self,
        id: &str,
    ) -> Result<Option<ProjectDetail>, PortfolioRepositoryError>;

    async fn get_stack(&self) -> Result<Vec<SkillItem>, PortfolioRepositoryError>;

    async fn get_experiences(&self) -> Result<Vec<Experience>, PortfolioRepositoryError>;

    /// Cheap check that the content source is reachable.
    async fn check(&self) -> Result<(), PortfolioRepositoryError>;
}
