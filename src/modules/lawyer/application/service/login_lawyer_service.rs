use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::credentials::Credentials;
use crate::auth::application::domain::entities::Principal;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::lawyer::application::ports::incoming::use_cases::{
    LawyerSession, LoginLawyerError, LoginLawyerUseCase,
};
use crate::lawyer::application::ports::outgoing::lawyer_repository::LawyerRepository;

pub struct LoginLawyerService<R>
where
    R: LawyerRepository,
{
    repo: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> LoginLawyerService<R>
where
    R: LawyerRepository,
{
    pub fn new(
        repo: R,
        hasher: Arc<dyn PasswordHasher + Send + Sync>,
        tokens: Arc<dyn TokenProvider + Send + Sync>,
    ) -> Self {
        Self {
            repo,
            hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<R> LoginLawyerUseCase for LoginLawyerService<R>
where
    R: LawyerRepository + Send + Sync,
{
    async fn execute(&self, credentials: Credentials) -> Result<LawyerSession, LoginLawyerError> {
        let found = self
            .repo
            .find_credentials_by_email(credentials.email())
            .await
            .map_err(|e| LoginLawyerError::RepositoryError(e.to_string()))?;

        let Some(found) = found.filter(|c| c.lawyer.is_active) else {
            return Err(LoginLawyerError::InvalidCredentials);
        };

        let matches = self
            .hasher
            .verify_password(credentials.password(), &found.password_hash)
            .await
            .map_err(|e| LoginLawyerError::HashingFailed(e.to_string()))?;
        if !matches {
            return Err(LoginLawyerError::InvalidCredentials);
        }

        let lawyer = found.lawyer;
        let access_token = self
            .tokens
            .generate_access_token(&lawyer.email, Principal::Lawyer(lawyer.id))
            .map_err(|e| LoginLawyerError::TokenFailed(e.to_string()))?;

        Ok(LawyerSession {
            access_token,
            token_type: "bearer",
            lawyer_id: lawyer.id,
            name: lawyer.name,
            email: lawyer.email,
            status: lawyer.status,
        })
    }
}
