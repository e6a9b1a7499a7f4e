use async_trait::async_trait;

use crate::auth::application::domain::credentials::Credentials;
use crate::user::application::ports::incoming::use_cases::signup_user::UserSession;

//
// ──────────────────────────────────────────────────────────
// Errors
// ──────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginUserError {
    /// Unknown email and wrong password are indistinguishable to the caller.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
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
pub trait LoginUserUseCase: Send + Sync {
    async fn execute(&self, credentials: Credentials) -> Result<UserSession, LoginUserError>;
}
