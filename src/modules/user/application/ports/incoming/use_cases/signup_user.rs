use async_trait::async_trait;
use serde::Serialize;

use crate::auth::application::domain::credentials::{normalize_email, EmailError};
use crate::auth::application::domain::entities::UserId;

//
// ──────────────────────────────────────────────────────────
// Command
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone)]
pub struct SignupUserCommand {
    name: String,
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SignupUserCommandError {
    #[error("Name cannot be empty")]
    EmptyName,

    #[error("{0}")]
    InvalidEmail(#[from] EmailError),

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl SignupUserCommand {
    pub fn new(
        name: String,
        email: String,
        password: String,
    ) -> Result<Self, SignupUserCommandError> {
        let name = name.trim().to_string();
        if name.is_empty() {
            return Err(SignupUserCommandError::EmptyName);
        }

        let email = normalize_email(&email)?;

        if password.trim().is_empty() {
            return Err(SignupUserCommandError::EmptyPassword);
        }

        Ok(Self {
            name,
            email,
            password,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

//
// ──────────────────────────────────────────────────────────
// Output
// ──────────────────────────────────────────────────────────
//

/// Session handed back after signup or login.
#[derive(Debug, Clone, Serialize)]
pub struct UserSession {
    pub access_token: String,
    pub token_type: &'static str,
    pub user_id: UserId,
    pub email: String,
    pub name: String,
}

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum SignupUserError {
    #[error("Email already registered")]
    EmailAlreadyRegistered,

    #[error("Password hashing failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

//
// ──────────────────────────────────────────────────────────
// Use case trait
// ──────────────────────────────────────────────────────────
//

#[async_trait]
pub trait SignupUserUseCase: Send + Sync {
    async fn execute(&self, command: SignupUserCommand) -> Result<UserSession, SignupUserError>;
}
