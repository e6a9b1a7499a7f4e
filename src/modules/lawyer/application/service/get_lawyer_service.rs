use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal};
use crate::lawyer::application::ports::incoming::use_cases::{GetLawyerError, GetLawyerUseCase};
use crate::lawyer::application::ports::outgoing::lawyer_repository::{
    LawyerRepository, LawyerResult,
};

pub struct GetLawyerService<R>
where
    R: LawyerRepository,
{
    repo: R,
}

impl<R> GetLawyerService<R>
where
    R: LawyerRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetLawyerUseCase for GetLawyerService<R>
where
    R: LawyerRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        lawyer_id: LawyerId,
    ) -> Result<LawyerResult, GetLawyerError> {
        let lawyer = self
            .repo
            .find_active_by_id(lawyer_id)
            .await
            .map_err(|e| GetLawyerError::RepositoryError(e.to_string()))?
            .ok_or(GetLawyerError::NotFound)?;

        if !caller.is_lawyer(lawyer_id) {
            return Err(GetLawyerError::Forbidden);
        }

        Ok(lawyer)
    }
}
