use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::complaint::application::ports::outgoing::ComplaintResult;
use crate::complaint::domain::ComplaintId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetComplaintError {
    #[error("Complaint not found")]
    NotFound,

    #[error("Not authorized to view this complaint")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetComplaintUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        id: ComplaintId,
    ) -> Result<ComplaintResult, GetComplaintError>;
}
