use async_trait::async_trait;

use crate::auth::application::domain::entities::{Principal, UserId};
use crate::user::application::ports::outgoing::user_repository::UserResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetUserError {
    #[error("User not found")]
    NotFound,

    #[error("Not allowed to access this user")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetUserUseCase: Send + Sync {
    async fn execute(&self, caller: Principal, user_id: UserId)
        -> Result<UserResult, GetUserError>;
}
