use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal, UserId};
use crate::complaint::application::ports::incoming::use_cases::{
    ListComplaintsError, ListLawyerComplaintsUseCase, ListPendingComplaintsUseCase,
    ListUserComplaintsUseCase,
};
use crate::complaint::application::ports::outgoing::{
    ComplaintRepository, ComplaintRepositoryError, ComplaintResult, ComplaintWithLawyer,
};

fn repo_err(e: ComplaintRepositoryError) -> ListComplaintsError {
    ListComplaintsError::RepositoryError(e.to_string())
}

pub struct ListUserComplaintsService<R>
where
    R: ComplaintRepository,
{
    repo: R,
}

impl<R> ListUserComplaintsService<R>
where
    R: ComplaintRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListUserComplaintsUseCase for ListUserComplaintsService<R>
where
    R: ComplaintRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        user_id: UserId,
    ) -> Result<Vec<ComplaintWithLawyer>, ListComplaintsError> {
        if !caller.is_user(user_id) {
            return Err(ListComplaintsError::Forbidden);
        }
        self.repo.list_by_user(user_id).await.map_err(repo_err)
    }
}

pub struct ListPendingComplaintsService<R>
where
    R: ComplaintRepository,
{
    repo: R,
}

impl<R> ListPendingComplaintsService<R>
where
    R: ComplaintRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListPendingComplaintsUseCase for ListPendingComplaintsService<R>
where
    R: ComplaintRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
    ) -> Result<Vec<ComplaintResult>, ListComplaintsError> {
        if matches!(caller, Principal::User(_)) {
            return Err(ListComplaintsError::Forbidden);
        }
        self.repo.list_pending().await.map_err(repo_err)
    }
}

pub struct ListLawyerComplaintsService<R>
where
    R: ComplaintRepository,
{
    repo: R,
}

impl<R> ListLawyerComplaintsService<R>
where
    R: ComplaintRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListLawyerComplaintsUseCase for ListLawyerComplaintsService<R>
where
    R: ComplaintRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        lawyer_id: LawyerId,
    ) -> Result<Vec<ComplaintResult>, ListComplaintsError> {
        if !caller.is_lawyer(lawyer_id) {
            return Err(ListComplaintsError::Forbidden);
        }
        self.repo.list_by_lawyer(lawyer_id).await.map_err(repo_err)
    }
}
