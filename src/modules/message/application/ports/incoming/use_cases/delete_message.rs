use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::message::domain::MessageId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum DeleteMessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Not authorized to delete this message")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait DeleteMessageUseCase: Send + Sync {
    async fn execute(&self, caller: Principal, id: MessageId) -> Result<(), DeleteMessageError>;
}
