use async_trait::async_trait;
use portfolio_site::models::StackResponse;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetStackError {
    #[error("Failed to fetch stack: {0}")]
    QueryFailed(String),
}

#[async_trait]
pub trait GetStackUseCase: Send + Sync {
    async fn execute(&self) -> Result<StackResponse, GetStackError>;
}
