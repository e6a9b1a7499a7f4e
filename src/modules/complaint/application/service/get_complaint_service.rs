use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::complaint::application::ports::incoming::use_cases::{
    GetComplaintError, GetComplaintUseCase,
};
use crate::complaint::application::ports::outgoing::{ComplaintRepository, ComplaintResult};
use crate::complaint::domain::ComplaintId;

pub struct GetComplaintService<R>
where
    R: ComplaintRepository,
{
    repo: R,
}

impl<R> GetComplaintService<R>
where
    R: ComplaintRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetComplaintUseCase for GetComplaintService<R>
where
    R: ComplaintRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        id: ComplaintId,
    ) -> Result<ComplaintResult, GetComplaintError> {
        let complaint = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| GetComplaintError::RepositoryError(e.to_string()))?
            .ok_or(GetComplaintError::NotFound)?;

        if !caller.is_party_to(complaint.user_id, complaint.lawyer_id) {
            return Err(GetComplaintError::Forbidden);
        }
        Ok(complaint)
    }
}
