use async_trait::async_trait;

use crate::lawyer::application::ports::incoming::use_cases::{
    LawyerPublicProfile, ListLawyersError, ListLawyersUseCase,
};
use crate::lawyer::application::ports::outgoing::lawyer_repository::LawyerRepository;
use crate::lawyer::domain::LawyerStatus;

pub struct ListLawyersService<R>
where
    R: LawyerRepository,
{
    repo: R,
}

impl<R> ListLawyersService<R>
where
    R: LawyerRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListLawyersUseCase for ListLawyersService<R>
where
    R: LawyerRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<LawyerPublicProfile>, ListLawyersError> {
        let lawyers = self
            .repo
            .list_active_by_status(LawyerStatus::Approved)
            .await
            .map_err(|e| ListLawyersError::RepositoryError(e.to_string()))?;

        Ok(lawyers.into_iter().map(LawyerPublicProfile::from).collect())
    }
}
