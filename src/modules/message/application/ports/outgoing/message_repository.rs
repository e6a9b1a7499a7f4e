use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::auth::application::domain::entities::{LawyerId, UserId};
use crate::message::domain::{ConversationParty, MessageId, SenderRole};

//
// ──────────────────────────────────────────────────────────
// DTOs
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq)]
pub struct CreateMessageData {
    pub user_id: UserId,
    pub lawyer_id: LawyerId,
    pub sender_role: SenderRole,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MessageResult {
    pub id: MessageId,
    pub user_id: UserId,
    pub lawyer_id: LawyerId,
    pub sender_role: SenderRole,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// Latest message exchanged with one counterpart. Exactly one of
/// `user_id`/`lawyer_id` is set: the counterpart's id.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConversationSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub lawyer_id: Option<LawyerId>,
    pub name: String,
    pub last_message: String,
    pub timestamp: DateTime<Utc>,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MessageRepositoryError {
    #[error("Message not found")]
    NotFound,

    #[error("Database error: {0}")]
    DatabaseError(String),
}

//
// ──────────────────────────────────────────────────────────
// Port
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait MessageRepository: Send + Sync {
    async fn create_message(
        &self,
        data: CreateMessageData,
    ) -> Result<MessageResult, MessageRepositoryError>;

    async fn find_by_id(
        &self,
        id: MessageId,
    ) -> Result<Option<MessageResult>, MessageRepositoryError>;

    /// Every message of the pair, oldest first.
    async fn list_history(
        &self,
        user_id: UserId,
        lawyer_id: LawyerId,
    ) -> Result<Vec<MessageResult>, MessageRepositoryError>;

    async fn update_content(
        &self,
        id: MessageId,
        content: String,
    ) -> Result<MessageResult, MessageRepositoryError>;

    async fn delete_message(&self, id: MessageId) -> Result<(), MessageRepositoryError>;

    /// One entry per counterpart of `party`, most recent conversation first.
    async fn list_conversations(
        &self,
        party: ConversationParty,
    ) -> Result<Vec<ConversationSummary>, MessageRepositoryError>;
}
