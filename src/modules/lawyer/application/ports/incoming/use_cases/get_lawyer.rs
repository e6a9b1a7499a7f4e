use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal};
use crate::lawyer::application::ports::outgoing::lawyer_repository::LawyerResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetLawyerError {
    #[error("Lawyer not found")]
    NotFound,

    #[error("Not allowed to view this lawyer profile")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetLawyerUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        lawyer_id: LawyerId,
    ) -> Result<LawyerResult, GetLawyerError>;
}
