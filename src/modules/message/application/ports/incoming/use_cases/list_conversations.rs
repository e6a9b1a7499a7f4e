use async_trait::async_trait;

use crate::auth::application::domain::entities::Principal;
use crate::message::application::ports::outgoing::ConversationSummary;
use crate::message::domain::ConversationParty;

#[derive(Debug, Clone, thiserror::Error)]
pub enum ListConversationsError {
    #[error("Not authorized to view these conversations")]
    Forbidden,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait ListConversationsUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        party: ConversationParty,
    ) -> Result<Vec<ConversationSummary>, ListConversationsError>;
}
