use async_trait::async_trait;

use crate::auth::application::domain::credentials::Credentials;
use crate::lawyer::application::ports::incoming::use_cases::register_lawyer::LawyerSession;

#[derive(Debug, Clone, thiserror::Error)]
pub enum LoginLawyerError {
    /// Also returned for deactivated accounts.
    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Password verification failed: {0}")]
    HashingFailed(String),

    #[error("Token generation failed: {0}")]
    TokenFailed(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}

#[async_trait]
pub trait LoginLawyerUseCase: Send + Sync {
    async fn execute(&self, credentials: Credentials) -> Result<LawyerSession, LoginLawyerError>;
}
