use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::complaint::domain::ComplaintId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteComplaintError {
    #[error("Complaint not found")]
    NotFound,

    #[error("Not authorized to delete this complaint")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Hard delete, allowed to the owner or the assigned lawyer in any status.
#[async_trait]
pub trait DeleteComplaintUseCase: Send + Sync {
    async fn execute(&self, caller: Principal, id: ComplaintId)
        -> Result<(), DeleteComplaintError>;
}
