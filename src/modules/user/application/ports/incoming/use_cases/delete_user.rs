use async_trait::async_trait;

use crate::auth::application::domain::entities::{Principal, UserId};

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteUserError {
    #[error("User not found")]
    NotFound,

    #[error("Not allowed to delete this user")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteUserUseCase: Send + Sync {
    async fn execute(&self, caller: Principal, user_id: UserId) -> Result<(), DeleteUserError>;
}
