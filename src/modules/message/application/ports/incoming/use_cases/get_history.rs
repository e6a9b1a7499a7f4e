use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal, UserId};
use crate::message::application::ports::outgoing::MessageResult;

#[derive(Debug, Clone, thiserror::Error)]
pub enum GetHistoryError {
    #[error("Not authorized to view this chat history")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait GetHistoryUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        user_id: UserId,
        lawyer_id: LawyerId,
    ) -> Result<Vec<MessageResult>, GetHistoryError>;
}
