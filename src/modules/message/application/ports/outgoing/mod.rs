pub mod message_repository;

pub use message_repository::{
    ConversationSummary, CreateMessageData, MessageRepository, MessageRepositoryError,
    MessageResult,
};
