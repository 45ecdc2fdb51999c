use async_trait::async_trait;
use portfolio_site::models::StackResponse;

use crate::portfolio::application::ports::{
    incoming::use_cases::{GetStackError, GetStackUseCase},
    outgoing::PortfolioRepository,
};

#[derive(Debug, Clone)]
pub struct GetStackService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    repository: R,
}

impl<R> GetStackService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> GetStackUseCase for GetStackService<R>
where
    R: PortfolioRepository + Send + Sync,
{
    async fn execute(&self) -> Result<StackResponse, GetStackError> {
        let stack = self
            .repository
            .get_stack()
            .await
            .map_err(|e| GetStackError::QueryFailed(e.to_string()))?;

        Ok(StackResponse::group(stack))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tests::support::portfolio_fixtures::{sample_skill, InMemoryPortfolioRepository};
    use portfolio_site::models::SkillCategory;

    #[tokio::test]
    async fn groups_skills_by_category() {
        // Arrange
        let repo = InMemoryPortfolioRepository {
            stack: vec![
                sample_skill("Rust", SkillCategory::Backend, 5),
                sample_skill("React", SkillCategory::Frontend, 3),
                sample_skill("Python", SkillCategory::Backend, 4),
            ],
            ..Default::default()
        };

        // Act
        let stack = GetStackService::new(repo).execute().await.unwrap();

        // Assert
        assert_eq!(stack.stack.len(), 3);
        assert_eq!(stack.by_category.len(), 2);
        let backend: Vec<&str> = stack.by_category[&SkillCategory::Backend]
            .iter()
            .map(|s| s.name.as_str())
            .collect();
        assert_eq!(backend, vec!["Rust", "Python"]);
    }

    #[tokio::test]
    async fn repository_failure_is_query_failed() {
        let service = GetStackService::new(InMemoryPortfolioRepository::failing("boom"));

        assert!(matches!(
            service.execute().await,
            Err(GetStackError::QueryFailed(_))
        ));
    }
}
