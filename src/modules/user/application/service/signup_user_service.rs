use async_trait::async_trait;
use std::sync::Arc;

use crate::auth::application::domain::entities::Principal;
use crate::auth::application::ports::outgoing::{PasswordHasher, TokenProvider};
use crate::user::application::ports::incoming::use_cases::{
    SignupUserCommand, SignupUserError, SignupUserUseCase, UserSession,
};
use crate::user::application::ports::outgoing::user_repository::{
    CreateUserData, UserRepository, UserRepositoryError,
};

pub struct SignupUserService<R>
where
    R: UserRepository,
{
    repo: R,
    hasher: Arc<dyn PasswordHasher + Send + Sync>,
    tokens: Arc<dyn TokenProvider + Send + Sync>,
}

impl<R> SignupUserService<R>
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
impl<R> SignupUserUseCase for SignupUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, command: SignupUserCommand) -> Result<UserSession, SignupUserError> {
        let taken = self
            .repo
            .email_exists(command.email())
            .await
            .map_err(|e| SignupUserError::RepositoryError(e.to_string()))?;

        if taken {
            return Err(SignupUserError::EmailAlreadyRegistered);
        }

        let password_hash = self
            .hasher
            .hash_password(command.password())
            .await
            .map_err(|e| SignupUserError::HashingFailed(e.to_string()))?;

        let user = self
            .repo
            .create_user(CreateUserData {
                name: command.name().to_string(),
                email: command.email().to_string(),
                password_hash,
            })
            .await
            .map_err(|e| match e {
                // lost a race with a concurrent signup
                UserRepositoryError::EmailAlreadyExists => SignupUserError::EmailAlreadyRegistered,
                other => SignupUserError::RepositoryError(other.to_string()),
            })?;

        let access_token = self
            .tokens
            .generate_access_token(&user.email, Principal::User(user.id))
            .map_err(|e| SignupUserError::TokenFailed(e.to_string()))?;

        tracing::info!(user_id = %user.id, "User registered");

        Ok(UserSession {
            access_token,
            token_type: "bearer",
            user_id: user.id,
            email: user.email,
            name: user.name,
        })
    }
}
