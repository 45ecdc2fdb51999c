use std::cmp::Reverse;

use async_trait::async_trait;
use portfolio_site::models::Experience;

use crate::portfolio::application::ports::{
    incoming::use_cases::{GetExperiencesError, GetExperiencesUseCase},
    outgoing::PortfolioRepository,
};

#[derive(Debug, Clone)]
pub struct GetExperiencesService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetExperiencesService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetExperiencesUseCase for GetExperiencesService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<Experience>, GetExperiencesError> {
        let mut experiences = self
            .repository
            .get_experiences()
            .await
            .map_err(|e| GetExperiencesError::QueryFailed(e.to_string()))?;

        experiences.sort_by_key(|e| (Reverse(e.current), Reverse(e.start_date)));

        Ok(experiences)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::portfolio_fixtures::{sample_experience, InMemoryPortfolioRepository};

    #[tokio::test]
    async fn current_first_then_most_recent_start() {
        // Arrange
        let repo = InMemoryPortfolioRepository {
            experiences: vec![
                sample_experience("old", (2015, 3), Some((2018, 1))),
                sample_experience("now", (2022, 6), None),
                sample_experience("recent", (2019, 2), Some((2022, 5))),
            ],
            ..Default::default()
        };

        // Act
        let experiences = GetExperiencesService::new(repo).execute().await.unwrap();

        // Assert
        let ids: Vec<&str> = experiences.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, vec!["now", "recent", "old"]);
        assert!(experiences[0].current);
    }

    #[tokio::test]
    async fn repository_failure_is_query_failed() {
        let service = GetExperiencesService::new(InMemoryPortfolioRepository::failing("boom"));

        assert!(matches!(
            service.execute().await,
            Err(GetExperiencesError::QueryFailed(_))
        ));
    }
}
