use async_trait::async_trait;

use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::application::ports::outgoing::lawyer_repository::LawyerResult;
use crate::lawyer::domain::LawyerStatus;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ReviewLawyerError {
    #[error("Lawyer not found")]
    NotFound,

    #[error("Cannot change lawyer status from '{from}' to '{to}'")]
    InvalidTransition { from: LawyerStatus, to: LawyerStatus },

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Approve or reject. Repeating the same decision is a no-op.
#[async_trait]
pub trait ReviewLawyerUseCase: Send + Sync {
    async fn execute(
        &self,
        lawyer_id: LawyerId,
        decision: LawyerStatus,
    ) -> Result<LawyerResult, ReviewLawyerError>;
}
