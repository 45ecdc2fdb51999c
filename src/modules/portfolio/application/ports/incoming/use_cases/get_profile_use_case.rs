use async_trait::async_trait;
use portfolio_site::models::Profile;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetProfileError {
    #[error("Failed to fetch profile: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetProfileUseCase: Send + Sync {
    async fn execute(&self) -> Result<Profile, GetProfileError>;
}
