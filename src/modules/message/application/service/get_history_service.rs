use async_trait::async_trait;

use crate::auth::application::domain::entities::{LawyerId, Principal, UserId};
use crate::message::application::ports::incoming::use_cases::{
    GetHistoryError, GetHistoryUseCase,
};
use crate::message::application::ports::outgoing::{MessageRepository, MessageResult};

pub struct GetHistoryService<R>
where
    R: MessageRepository,
{
    repo: R,
}

impl<R> GetHistoryService<R>
where
    R: MessageRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetHistoryUseCase for GetHistoryService<R>
where
    R: MessageRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        user_id: UserId,
        lawyer_id: LawyerId,
    ) -> Result<Vec<MessageResult>, GetHistoryError> {
        if !caller.is_party_to(user_id, Some(lawyer_id)) {
            return Err(GetHistoryError::Forbidden);
        }

        self.repo
            .list_history(user_id, lawyer_id)
            .await
            .map_err(|e| GetHistoryError::RepositoryError(e.to_string()))
    }
}
