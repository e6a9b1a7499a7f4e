pub mod delete_message_service;
pub mod edit_message_service;
pub mod get_history_service;
pub mod list_conversations_service;
pub mod send_message_service;

pub use delete_message_service::DeleteMessageService;
pub use edit_message_service::EditMessageService;
pub use get_history_service::GetHistoryService;
pub use list_conversations_service::ListConversationsService;
pub use send_message_service::SendMessageService;
