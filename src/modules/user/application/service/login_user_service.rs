use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::credentials::Credentials;
use crate::auth::application::domain::entities::Principal;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::user::application::ports::incoming::use_cases::{
    LoginUserError, LoginUserUseCase, UserSession,
};
use crate::user::application::ports::outgoing::user_repository::UserRepository;

pub struct LoginUserService<R>
where
    R: UserRepository,
{
    repo: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> LoginUserService<R>
where
    R: UserRepository,
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
impl<R> LoginUserUseCase for LoginUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, credentials: Credentials) -> Result<UserSession, LoginUserError> {
        let found = self
            .repo
            .find_credentials_by_email(credentials.email())
            .await
            .map_err(|e| LoginUserError::RepositoryError(e.to_string()))?;

        let Some(found) = found else {
            return Err(LoginUserError::InvalidCredentials);
        };

        let matches = self
            .hasher
            .verify_password(credentials.password(), &found.password_hash)
            .await
            .map_err(|e| LoginUserError::HashingFailed(e.to_string()))?;

        if !matches {
            return Err(LoginUserError::InvalidCredentials);
        }

        let user = found.user;
        let access_token = self
            .tokens
            .generate_access_token(&user.email, Principal::User(user.id))
            .map_err(|e| LoginUserError::TokenFailed(e.to_string()))?;

        Ok(UserSession {
            access_token,
            token_type: "bearer",
            user_id: user.id,
            email: user.email,
            name: user.name,
        })
    }
}
