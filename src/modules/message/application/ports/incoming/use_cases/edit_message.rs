use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::message::application::ports::outgoing::MessageResult;
use crate::message::domain::MessageId;

#[derive(Debug, Clone, thiserror::Error)]
pub enum EditMessageError {
    #[error("Message not found")]
    NotFound,

    #[error("Not authorized to edit this message")]
    Forbidden,

    #[error("Message content cannot be empty")]
    EmptyContent,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

/// Replaces `content`; the rest of the message is immutable.
#[async_trait]
pub trait EditMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        id: MessageId,
        content: String,
    ) -> Result<MessageResult, EditMessageError>;
}
