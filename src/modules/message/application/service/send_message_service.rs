use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::message::application::ports::incoming::use_cases::{
    SendMessageCommand, SendMessageError, SendMessageUseCase,
};
use crate::message::application::ports::outgoing::{
    CreateMessageData, MessageRepository, MessageResult,
};
use crate::message::domain::SenderRole;

pub struct SendMessageService<R>
where
    R: MessageRepository,
{
    repo: R,
}

impl<R> SendMessageService<R>
where
    R: MessageRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> SendMessageUseCase for SendMessageService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        command: SendMessageCommand,
    ) -> Result<MessageResult, SendMessageError> {
        let sender_role = SenderRole::of(&caller).ok_or(SendMessageError::Forbidden)?;

        if command.claimed_role.is_some_and(|claimed| claimed != sender_role) {
            return Err(SendMessageError::Forbidden);
        }

        let is_own_side = match sender_role {
            SenderRole::User => caller.is_user(command.user_id),
            SenderRole::Lawyer => caller.is_lawyer(command.lawyer_id),
        };
        if !is_own_side {
            tracing::warn!(
                role = %sender_role,
                caller_id = ?caller.id(),
                user_id = %command.user_id,
                lawyer_id = %command.lawyer_id,
                "Message sender does not match token"
            );
            return Err(SendMessageError::Forbidden);
        }

        let user_id = command.user_id;
        let lawyer_id = command.lawyer_id;

        self.repo
            .create_message(CreateMessageData {
                user_id,
                lawyer_id,
                sender_role,
                content: command.content,
            })
            .await
            .map_err(|e| SendMessageError::PersistFailed {
                reason: e.to_string(),
                user_id,
                lawyer_id,
            })
    }
}
