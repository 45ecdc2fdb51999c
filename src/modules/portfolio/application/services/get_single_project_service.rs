use async_trait::async_trait;
use portfolio_site::models::ProjectDetail;

use crate::portfolio::application::ports::{
    incoming::use_cases::{GetSingleProjectError, GetSingleProjectUseCase},
    outgoing::PortfolioRepository,
};

#[derive(Debug, Clone)]
pub struct GetSingleProjectService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetSingleProjectService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetSingleProjectUseCase for GetSingleProjectService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self, project_id: &str) -> Result<ProjectDetail, GetSingleProjectError> {
        self.repository
            .get_project_by_id(project_id)
            .await
            .map_err(|e| GetSingleProjectError::QueryFailed(e.to_string()))?
            .ok_or(GetSingleProjectError::NotFound)
    }
}
