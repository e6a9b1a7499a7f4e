use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal, UserId};
use crate::message::application::ports::outgoing::MessageResult;
use crate::message::domain::{SenderRole, SenderRoleError};

#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub user_id: UserId,
    pub lawyer_id: LawyerId,
    pub content: String,
    /// Role the client claims to write as; checked against the token.
    pub claimed_role: Option<SenderRole>,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SendMessageCommandError {
    #[error("Message content cannot be empty")]
    EmptyContent,

    #[error("{0}")]
    InvalidRole(#[from] SenderRoleError),
}

impl SendMessageCommand {
    pub fn new(
        user_id: i32,
        lawyer_id: i32,
        content: String,
        sender_role: Option<String>,
    ) -> Result<Self, SendMessageCommandError> {
        if content.trim().is_empty() {
            return Err(SendMessageCommandError::EmptyContent);
        }

        let claimed_role = sender_role
            .filter(|r| !r.trim().is_empty())
            .map(|r| r.parse::<SenderRole>())
            .transpose()?;

        Ok(Self {
            user_id: UserId::from(user_id),
            lawyer_id: LawyerId::from(lawyer_id),
            content,
            claimed_role,
        })
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum SendMessageError {
    #[error("Not authorized to send as this party")]
    Forbidden,

    /// Carries the store's reason; usually an unknown user or lawyer id.
    #[error("Backend Error: {reason}. Ensure User ID {user_id} and Lawyer ID {lawyer_id} exist.")]
    PersistFailed {
        reason: String,
        user_id: UserId,
        lawyer_id: LawyerId,
    },
}

/// The sender role is derived from the caller: a user must be `user_id`, a
/// lawyer must be `lawyer_id`.
#[async_trait]
pub trait SendMessageUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        command: SendMessageCommand,
    ) -> Result<MessageResult, SendMessageError>;
}
