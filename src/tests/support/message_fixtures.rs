use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::{Duration, Utc};

use crate::auth::application::domain::entities::{LawyerId, UserId};
use crate::message::application::ports::outgoing::{
    ConversationSummary, CreateMessageData, MessageRepository, MessageRepositoryError,
    MessageResult,
};
use crate::message::domain::{ConversationParty, MessageId, SenderRole};

/// Message `id` between `user_id` and `lawyer_id`; later ids are newer.
pub fn message_result(id: i32, user_id: i32, lawyer_id: i32, role: SenderRole) -> MessageResult {
    MessageResult {
        id: MessageId::from(id),
        user_id: UserId::from(user_id),
        lawyer_id: LawyerId::from(lawyer_id),
        sender_role: role,
        content: format!("Message {}", id),
        created_at: Utc::now() + Duration::seconds(id as i64),
    }
}

/// Vec-backed repository. Sends naming an id missing from `users`/`lawyers`
/// fail the way a foreign key would.
#[derive(Default)]
pub struct InMemoryMessageRepository {
    rows: Mutex<Vec<MessageResult>>,
    users: HashMap<i32, String>,
    lawyers: HashMap<i32, String>,
    fail_with: Option<MessageRepositoryError>,
}

impl InMemoryMessageRepository {
    pub fn failing(err: MessageRepositoryError) -> Self {
        Self {
            fail_with: Some(err),
            ..Default::default()
        }
    }

    pub fn with_user(mut self, id: i32, name: &str) -> Self {
        self.users.insert(id, name.to_string());
        self
    }

    pub fn with_lawyer(mut self, id: i32, name: &str) -> Self {
        self.lawyers.insert(id, name.to_string());
        self
    }

    pub fn with_message(self, message: MessageResult) -> Self {
        self.rows.lock().unwrap().push(message);
        self
    }

    pub fn get(&self, id: i32) -> Option<MessageResult> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|m| m.id == MessageId::from(id))
            .cloned()
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), MessageRepositoryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl MessageRepository for InMemoryMessageRepository {
    async fn create_message(
        &self,
        data: CreateMessageData,
    ) -> Result<MessageResult, MessageRepositoryError> {
        self.check()?;

        if !self.users.contains_key(&data.user_id.value())
            || !self.lawyers.contains_key(&data.lawyer_id.value())
        {
            return Err(MessageRepositoryError::DatabaseError(
                "violates foreign key constraint".to_string(),
            ));
        }

        let mut rows = self.rows.lock().unwrap();
        let id = rows.iter().map(|m| m.id.value()).max().unwrap_or(0) + 1;
        let message = MessageResult {
            id: MessageId::from(id),
            user_id: data.user_id,
            lawyer_id: data.lawyer_id,
            sender_role: data.sender_role,
            content: data.content,
            created_at: Utc::now() + Duration::seconds(id as i64),
        };
        rows.push(message.clone());
        Ok(message)
    }

    async fn find_by_id(
        &self,
        id: MessageId,
    ) -> Result<Option<MessageResult>, MessageRepositoryError> {
        self.check()?;
        Ok(self.get(id.value()))
    }

    async fn list_history(
        &self,
        user_id: UserId,
        lawyer_id: LawyerId,
    ) -> Result<Vec<MessageResult>, MessageRepositoryError> {
        self.check()?;
        let mut history: Vec<MessageResult> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|m| m.user_id == user_id && m.lawyer_id == lawyer_id)
            .cloned()
            .collect();
        history.sort_by(|a, b| a.created_at.cmp(&b.created_at));
        Ok(history)
    }

    async fn update_content(
        &self,
        id: MessageId,
        content: String,
    ) -> Result<MessageResult, MessageRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let message = rows
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(MessageRepositoryError::NotFound)?;
        message.content = content;
        Ok(message.clone())
    }

    async fn delete_message(&self, id: MessageId) -> Result<(), MessageRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|m| m.id != id);

        if rows.len() == before {
            return Err(MessageRepositoryError::NotFound);
        }
        Ok(())
    }

    async fn list_conversations(
        &self,
        party: ConversationParty,
    ) -> Result<Vec<ConversationSummary>, MessageRepositoryError> {
        self.check()?;
        let rows = self.rows.lock().unwrap();

        let mut latest: HashMap<i32, &MessageResult> = HashMap::new();
        for m in rows.iter() {
            let counterpart = match party {
                ConversationParty::User(id) if m.user_id == id => m.lawyer_id.value(),
                ConversationParty::Lawyer(id) if m.lawyer_id == id => m.user_id.value(),
                _ => continue,
            };
            let newer = latest
                .get(&counterpart)
                .is_none_or(|prev| m.created_at > prev.created_at);
            if newer {
                latest.insert(counterpart, m);
            }
        }

        let mut summaries: Vec<ConversationSummary> = latest
            .into_iter()
            .filter_map(|(counterpart, m)| {
                let (user_id, lawyer_id, name) = match party {
                    ConversationParty::User(_) => (
                        None,
                        Some(LawyerId::from(counterpart)),
                        self.lawyers.get(&counterpart)?,
                    ),
                    ConversationParty::Lawyer(_) => (
                        Some(UserId::from(counterpart)),
                        None,
                        self.users.get(&counterpart)?,
                    ),
                };
                Some(ConversationSummary {
                    user_id,
                    lawyer_id,
                    name: name.clone(),
                    last_message: m.content.clone(),
                    timestamp: m.created_at,
                })
            })
            .collect();
        summaries.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
        Ok(summaries)
    }
}
