use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal};
use crate::complaint::application::ports::outgoing::ComplaintResult;
use crate::complaint::domain::ComplaintId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AcceptComplaintError {
    #[error("Complaint not found")]
    ComplaintNotFound,

    #[error("Only the assigned lawyer may accept this complaint")]
    Forbidden,

    #[error("Lawyer not found")]
    LawyerNotFound,

    #[error("Your account is pending approval. You cannot accept cases yet.")]
    LawyerNotApproved,

    #[error("Complaint has already been accepted")]
    NotPending,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait AcceptComplaintUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        id: ComplaintId,
        lawyer_id: LawyerId,
    ) -> Result<ComplaintResult, AcceptComplaintError>;
}
