pub mod message;

pub use message::{ConversationParty, MessageId, SenderRole, SenderRoleError};
