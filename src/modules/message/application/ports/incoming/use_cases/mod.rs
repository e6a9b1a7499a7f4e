pub mod delete_message;
pub mod edit_message;
pub mod get_history;
pub mod list_conversations;
pub mod send_message;

pub use delete_message::{DeleteMessageError, DeleteMessageUseCase};
pub use edit_message::{EditMessageError, EditMessageUseCase};
pub use get_history::{GetHistoryError, GetHistoryUseCase};
pub use list_conversations::{ListConversationsError, ListConversationsUseCase};
pub use send_message::{
    SendMessageCommand, SendMessageCommandError, SendMessageError, SendMessageUseCase,
};
