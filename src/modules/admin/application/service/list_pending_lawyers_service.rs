use async_trait::async_trait;

use crate::admin::application::ports::incoming::use_cases::{
    ListPendingLawyersError, ListPendingLawyersUseCase,
};
use crate::lawyer::application::ports::outgoing::lawyer_repository::{
    LawyerRepository, LawyerResult,
};
use crate::lawyer::domain::LawyerStatus;

pub struct ListPendingLawyersService<R>
where
    R: LawyerRepository,
{
    repo: R,
}

impl<R> ListPendingLawyersService<R>
where
    R: LawyerRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListPendingLawyersUseCase for ListPendingLawyersService<R>
where
    R: LawyerRepository + Send + Sync,
{
    async fn execute(&self) -> Result<Vec<LawyerResult>, ListPendingLawyersError> {
        self.repo
            .list_active_by_status(LawyerStatus::Pending)
            .await
            .map_err(|e| ListPendingLawyersError::RepositoryError(e.to_string()))
    }
}
