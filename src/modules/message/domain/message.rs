use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::auth::application::domain::entities::{LawyerId, Principal, UserId};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MessageId(i32);

impl MessageId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for MessageId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for MessageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Which side of the (user, lawyer) pair wrote a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SenderRole {
    User,
    Lawyer,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("sender_role must be 'user' or 'lawyer', got '{0}'")]
pub struct SenderRoleError(pub String);

impl SenderRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            SenderRole::User => "user",
            SenderRole::Lawyer => "lawyer",
        }
    }

    /// Admins never take part in a conversation.
    pub fn of(principal: &Principal) -> Option<Self> {
        match principal {
            Principal::User(_) => Some(SenderRole::User),
            Principal::Lawyer(_) => Some(SenderRole::Lawyer),
            Principal::Admin => None,
        }
    }
}

impl FromStr for SenderRole {
    type Err = SenderRoleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(SenderRole::User),
            "lawyer" => Ok(SenderRole::Lawyer),
            other => Err(SenderRoleError(other.to_string())),
        }
    }
}

impl fmt::Display for SenderRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The party whose conversation list is requested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConversationParty {
    User(UserId),
    Lawyer(LawyerId),
}

impl ConversationParty {
    pub fn parse(role: &str, id: i32) -> Result<Self, SenderRoleError> {
        Ok(match role.parse::<SenderRole>()? {
            SenderRole::User => ConversationParty::User(UserId::from(id)),
            SenderRole::Lawyer => ConversationParty::Lawyer(LawyerId::from(id)),
        })
    }

    pub fn is(&self, principal: &Principal) -> bool {
        match self {
            ConversationParty::User(id) => principal.is_user(*id),
            ConversationParty::Lawyer(id) => principal.is_lawyer(*id),
        }
    }
}
