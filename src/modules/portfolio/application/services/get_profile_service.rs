use async_trait::async_trait;
use portfolio_site::models::Profile;

use crate::portfolio::application::ports::{
    incoming::use_cases::{GetProfileError, GetProfileUseCase},
    outgoing::PortfolioRepository,
};

#[derive(Debug, Clone)]
pub struct GetProfileService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetProfileService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetProfileUseCase for GetProfileService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Profile, GetProfileError> {
        self.repository
            .get_profile()
            .await
            .map_err(|e| GetProfileError::QueryFailed(e.to_string()))
    }
}
