pub mod delete_message;
pub mod edit_message;
pub mod get_history;
pub mod list_conversations;
pub mod send_message;

pub use delete_message::delete_message_handler;
pub use edit_message::edit_message_handler;
pub use get_history::get_history_handler;
pub use list_conversations::list_conversations_handler;
pub use send_message::{send_message_handler, SendMessageRequest};
