use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::message::application::ports::incoming::use_cases::{
    EditMessageError, EditMessageUseCase,
};
use crate::message::application::ports::outgoing::{
    MessageRepository, MessageRepositoryError, MessageResult,
};
use crate::message::domain::{MessageId, SenderRole};

pub struct EditMessageService<R>
where
    R: MessageRepository,
{
    repo: R,
}

impl<R> EditMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> EditMessageUseCase for EditMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        id: MessageId,
        content: String,
    ) -> Result<MessageResult, EditMessageError> {
        if content.trim().is_empty() {
            return Err(EditMessageError::EmptyContent);
        }

        let message = self
            .repo
            .find_by_id(id)
            .await
            .map_err(|e| EditMessageError::RepositoryError(e.to_string()))?
            .ok_or(EditMessageError::NotFound)?;

        // Content belongs to whoever wrote it; the counterpart may only delete.
        if !caller.is_party_to(message.user_id, Some(message.lawyer_id))
            || SenderRole::of(&caller) != Some(message.sender_role)
        {
            return Err(EditMessageError::Forbidden);
        }

        self.repo
            .update_content(id, content)
            .await
            .map_err(|e| match e {
                MessageRepositoryError::NotFound => EditMessageError::NotFound,
                other => EditMessageError::RepositoryError(other.to_string()),
            })
    }
}
