use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::message::application::ports::incoming::use_cases::{
    ListConversationsError, ListConversationsUseCase,
};
use crate::message::application::ports::outgoing::{ConversationSummary, MessageRepository};
use crate::message::domain::ConversationParty;

pub struct ListConversationsService<R>
where
    R: MessageRepository,
{
    repo: R,
}

impl<R> ListConversationsService<R>
where
    R: MessageRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> ListConversationsUseCase for ListConversationsService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        party: ConversationParty,
    ) -> Result<Vec<ConversationSummary>, ListConversationsError> {
        if !party.is(&caller) {
            return Err(ListConversationsError::Forbidden);
        }

        self.repo
            .list_conversations(party)
            .await
            .map_err(|e| ListConversationsError::RepositoryError(e.to_string()))
    }
}
