use async_trait::async_trait;
use portfolio_site::models::{ProjectDetail, ProjectSummary};

use crate::portfolio::application::ports::{
    incoming::use_cases::{GetProjectsError, GetProjectsUseCase},
    outgoing::PortfolioRepository,
};

#[derive(Debug, Clone)]
pub struct GetProjectsService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetProjectsService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

fn sort_projects(projects: &mut [ProjectDetail]) {
    projects.sort_by(|a, b| b.featured.cmp(&a.featured).then_with(|| a.name.cmp(&b.name)));
}

#[async_trait]
impl<R> GetProjectsUseCase for GetProjectsService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<ProjectSummary>, GetProjectsError> {
        let mut projects = self
            .repository
            .get_projects()
            .await
            .map_err(|e| GetProjectsError::QueryFailed(e.to_string()))?;

        sort_projects(&mut projects);

        Ok(projects.iter().map(ProjectDetail::summary).collect())
    }
}
