use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::complaint::application::ports::incoming::use_cases::{
    DeleteComplaintError, DeleteComplaintUseCase,
};
use crate::complaint::application::ports::outgoing::{
    ComplaintRepository, ComplaintRepositoryError,
};
use crate::complaint::domain::ComplaintId;

pub struct DeleteComplaintService<R>
where
    R: ComplaintRepository,
{
    repo: R,
}

impl<R> DeleteComplaintService<R>
where
    R: ComplaintRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteComplaintUseCase for DeleteComplaintService<R>
where
    R: ComplaintRepository + Send + Sync,
{
    async fn execute(&self, caller: Principal, id: ComplaintId) -> Result<(), DeleteComplaintError> {
        let existing = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DeleteComplaintError::RepositoryError(e.to_string()))?
            .ok_or(DeleteComplaintError::NotFound)?;

        if !caller.is_party_to(existing.user_id, existing.lawyer_id) {
            return Err(DeleteComplaintError::Forbidden);
        }

        self.repo.delete_complaint(id).await.map_err(|e| match e {
            ComplaintRepositoryError::NotFound => DeleteComplaintError::NotFound,
            other => DeleteComplaintError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(complaint_id = %id, role = ?caller.role(), "Complaint deleted");
        Ok(())
    }
}
