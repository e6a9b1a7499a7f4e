use std::sync::Arc;

use crate::message::application::ports::incoming::use_cases::{
    DeleteMessageUseCase, EditMessageUseCase, GetHistoryUseCase, ListConversationsUseCase,
    SendMessageUseCase,
};

#[derive(Clone)]
pub struct MessageUseCases {
    pub send: Arc<dyn SendMessageUseCase + Send + Sync>,
    pub history: Arc<dyn GetHistoryUseCase + Send + Sync>,
    pub edit: Arc<dyn EditMessageUseCase + Send + Sync>,
    pub delete: Arc<dyn DeleteMessageUseCase + Send + Sync>,
    pub conversations: Arc<dyn ListConversationsUseCase + Send + Sync>,
}
