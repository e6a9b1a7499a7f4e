use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageError, DeleteMessageUseCase,
};
use crate::message::application::ports::outgoing::{MessageRepository, MessageRepositoryError};
use crate::message::domain::MessageId;

pub struct DeleteMessageService<R>
where
    R: MessageRepository,
{
    repo: R,
}

impl<R> DeleteMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteMessageUseCase for DeleteMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(&self, caller: Principal, id: MessageId) -> Result<(), DeleteMessageError> {
        let message = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| DeleteMessageError::RepositoryError(e.to_string()))?
            .ok_or(DeleteMessageError::NotFound)?;

        if !caller.is_party_to(message.user_id, Some(message.lawyer_id)) {
            return Err(DeleteMessageError::Forbidden);
        }

        self.repo.delete_message(id).await.map_err(|e| match e {
            MessageRepositoryError::NotFound => DeleteMessageError::NotFound,
            other => DeleteMessageError::RepositoryError(other.to_string()),
        })
    }
}
