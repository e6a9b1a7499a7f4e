use async_trait::async_trait;

use crate::auth::application::domain::credentials::{normalize_email, EmailError};
use crate::auth::application::domain::entities::{Principal, UserId};
use crate::user::application::ports::outgoing::user_repository::{PatchUserData, UserResult};

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

/// Partial profile update; `None` leaves the stored value alone.
#[derive(Debug, Clone, Default)]
pub struct UpdateUserCommand {
    data: PatchUserData,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UpdateUserCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("{0}")]
    InvalidEmail(#[from] EmailError),
}

impl UpdateUserCommand {
    pub fn new(
        name: Option<String>,
        email: Option<String>,
    ) -> Result<Self, UpdateUserCommandError> {
        let name = match name {
            Some(n) if n.trim().is_empty() => return Err(UpdateUserCommandError::EmptyName),
            Some(n) => Some(n.trim().to_string()),
            None => None,
        };

        let email = email.map(|e| normalize_email(&e)).transpose()?;

        Ok(Self {
            data: PatchUserData { name, email },
        })
    }

    pub fn data(&self) -> &PatchUserData {
        &self.data
    }

    pub fn into_data(self) -> PatchUserData {
        self.data
    }
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum UpdateUserError {
    #[error("User not found")]
    NotFound,

    #[error("Not allowed to update this user")]
    Forbidden,

    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait UpdateUserUseCase: Send + Sync {
    async fn execute(
        &self,
        caller: Principal,
        user_id: UserId,
        command: UpdateUserCommand,
    ) -> Result<UserResult, UpdateUserError>;
}
