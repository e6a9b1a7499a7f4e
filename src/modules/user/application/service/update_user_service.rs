use async_trait::async_trait;

use crate::auth::application::domain::entities::{Principal, UserId};
use crate::user::application::ports::incoming::use_cases::{
    UpdateUserCommand, UpdateUserError, UpdateUserUseCase,
};
use crate::user::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError, UserResult,
};

pub struct UpdateUserService<R>
where
    R: UserRepository,
{
    repo: R,
}

impl<R> UpdateUserService<R>
where
    R: UserRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> UpdateUserUseCase for UpdateUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller: Principal,
        user_id: UserId,
        command: UpdateUserCommand,
    ) -> Result<UserResult, UpdateUserError> {
        let current = self
            .repo
            .find_by_id(user_id)
            .await
            .map_err(|e| UpdateUserError::RepositoryError(e.to_string()))?
            .ok_or(UpdateUserError::NotFound)?;

        if !caller.is_user(user_id) {
            return Err(UpdateUserError::Forbidden);
        }

        let mut data = command.into_data();

        // Re-submitting the current email is not a conflict
        if data.email.as_deref() == Some(current.email.as_str()) {
            data.email = None;
        }

        if let Some(email) = &data.email {
            let taken = self
                .repo
                .email_exists(email)
                .await
                .map_err(|e| UpdateUserError::RepositoryError(e.to_string()))?;
            if taken {
                return Err(UpdateUserError::EmailAlreadyRegistered);
            }
        }

        self.repo
            .patch_user(user_id, data)
            .await
            .map_err(|e| match e {
                UserRepositoryError::NotFound => UpdateUserError::NotFound,
                UserRepositoryError::EmailAlreadyExists => UpdateUserError::EmailAlreadyRegistered,
                UserRepositoryError::DatabaseError(msg) => UpdateUserError::RepositoryError(msg),
            })
    }
}
