use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(i32);

impl UserId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for UserId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<UserId> for i32 {
    fn from(id: UserId) -> Self {
        id.0
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LawyerId(i32);

impl LawyerId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for LawyerId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl From<LawyerId> for i32 {
    fn from(id: LawyerId) -> Self {
        id.0
    }
}

impl fmt::Display for LawyerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Lawyer,
    Admin,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Lawyer => "lawyer",
            Role::Admin => "admin",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Who is calling. Built once from verified token claims.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Principal {
    User(UserId),
    Lawyer(LawyerId),
    Admin,
}

impl Principal {
    pub fn role(&self) -> Role {
        match self {
            Principal::User(_) => Role::User,
            Principal::Lawyer(_) => Role::Lawyer,
            Principal::Admin => Role::Admin,
        }
    }

    /// Numeric subject id; admins have none.
    pub fn id(&self) -> Option<i32> {
        match self {
            Principal::User(id) => Some(id.value()),
            Principal::Lawyer(id) => Some(id.value()),
            Principal::Admin => None,
        }
    }

    pub fn is_user(&self, user_id: UserId) -> bool {
        matches!(self, Principal::User(id) if *id == user_id)
    }

    pub fn is_lawyer(&self, lawyer_id: LawyerId) -> bool {
        matches!(self, Principal::Lawyer(id) if *id == lawyer_id)
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Principal::Admin)
    }

    /// True when the caller is the owning user or the assigned lawyer of a row.
    pub fn is_party_to(&self, user_id: UserId, lawyer_id: Option<LawyerId>) -> bool {
        match self {
            Principal::User(id) => *id == user_id,
            Principal::Lawyer(id) => Some(*id) == lawyer_id,
            Principal::Admin => false,
        }
    }
}
