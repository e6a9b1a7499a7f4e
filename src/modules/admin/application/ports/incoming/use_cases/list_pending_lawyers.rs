use async_trait::async_trait;

use crate::lawyer::application::ports::outgoing::lawyer_repository::LawyerResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListPendingLawyersError {
    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Active lawyers still awaiting a decision, oldest first.
#[async_trait]
pub trait ListPendingLawyersUseCase: Send + Sync {
    async fn execute(&self) -> Result<Vec<LawyerResult>, ListPendingLawyersError>;
}
