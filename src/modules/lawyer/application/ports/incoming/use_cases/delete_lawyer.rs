use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteLawyerError {
    #[error("Lawyer not found")]
    NotFound,

    #[error("Not allowed to delete this lawyer profile")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteLawyerUseCase: Send + Sync {
    /// Soft delete; the row stays but drops out of every active query.
    async fn execute(&self, caller: Principal, lawyer_id: LawyerId)
        -> Result<(), DeleteLawyerError>;
}
