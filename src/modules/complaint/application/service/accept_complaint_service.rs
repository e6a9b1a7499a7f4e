use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::{LawyerId, Principal};
use crate::complaint::application::ports::incoming::use_cases::{
    AcceptComplaintError, AcceptComplaintUseCase,
};
use crate::complaint::application::ports::outgoing::{
    ComplaintRepository, ComplaintRepositoryError, ComplaintResult,
};
use crate::complaint::domain::ComplaintId;
use crate::lawyer::application::ports::outgoing::lawyer_repository::LawyerRepository;

/// Assigns a pending complaint to the calling lawyer.
///
/// Checks run in order: the complaint exists, the caller is the named lawyer,
/// that lawyer is active and approved, the complaint is still pending. The
/// final write is conditional on `pending`, so of two lawyers racing for the
/// same complaint exactly one wins.
pub struct AcceptComplaintService<R>
where
    R: ComplaintRepository,
{
    repo: R,
    lawyers: Arc<dyn LawyerRepository + Send + Sync>,
}

impl<R> AcceptComplaintService<R>
where
    R: ComplaintRepository,
{
    pub fn new(repo: R, lawyers: Arc<dyn LawyerRepository + Send + Sync>) -> Self {
        Self { repo, lawyers }
    }
}

#[async_trait]
impl<R> AcceptComplaintUseCase for AcceptComplaintService<R>
where
    R: ComplaintRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        id: ComplaintId,
        lawyer_id: LawyerId,
    ) -> Result<ComplaintResult, AcceptComplaintError> {
        let complaint = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| AcceptComplaintError::RepositoryError(e.to_string()))?
            .ok_or(AcceptComplaintError::ComplaintNotFound)?;

        if !caller.is_lawyer(lawyer_id) {
            return Err(AcceptComplaintError::Forbidden);
        }

        let lawyer = self
            .lawyers
            .find_active_by_id(lawyer_id)
            .await
            .map_err(|e| AcceptComplaintError::RepositoryError(e.to_string()))?
            .ok_or(AcceptComplaintError::LawyerNotFound)?;

        if !lawyer.status.is_approved() {
            return Err(AcceptComplaintError::LawyerNotApproved);
        }

        if !complaint.status.is_pending() {
            return Err(AcceptComplaintError::NotPending);
        }

        let accepted = self
            .repo
            .accept(id, lawyer_id)
            .await
            .map_err(|e| match e {
                ComplaintRepositoryError::NotFound => AcceptComplaintError::ComplaintNotFound,
                ComplaintRepositoryError::NotPending => AcceptComplaintError::NotPending,
                other => AcceptComplaintError::RepositoryError(other.to_string()),
            })?;

        tracing::info!(complaint_id = %id, lawyer_id = %lawyer_id, "Complaint accepted");
        Ok(accepted)
    }
}
