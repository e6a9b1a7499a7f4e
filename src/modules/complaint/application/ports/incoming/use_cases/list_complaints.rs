use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal, UserId};
use crate::complaint::application::ports::outgoing::{ComplaintResult, ComplaintWithLawyer};

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListComplaintsError {
    #[error("Not authorized to view these complaints")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// The caller's own complaints with assigned lawyer contact, newest first.
#[async_trait]
pub trait ListUserComplaintsUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        user_id: UserId,
    ) -> Result<Vec<ComplaintWithLawyer>, ListComplaintsError>;
}

/// Open complaints, visible to admins and lawyers.
#[async_trait]
pub trait ListPendingComplaintsUseCase: Send + Sync {
    async fn execute(&self, caller: Principal)
        -> Result<Vec<ComplaintResult>, ListComplaintsError>;
}

#[async_trait]
pub trait ListLawyerComplaintsUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        lawyer_id: LawyerId,
    ) -> Result<Vec<ComplaintResult>, ListComplaintsError>;
}
