use async_trait::async_trait;

use crate::auth::application::domain::entities::{Principal, UserId};
use crate::user::application::ports::incoming::use_cases::{DeleteUserError, DeleteUserUseCase};
use crate::user::application::ports::outgoing::user_repository::{
    UserRepository, UserRepositoryError,
};

pub struct DeleteUserService<R>
where
    R: UserRepository,
{
    repo: R,
}

impl<R> DeleteUserService<R>
where
    R: UserRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> DeleteUserUseCase for DeleteUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, caller: Principal, user_id: UserId) -> Result<(), DeleteUserError> {
        self.repo
            .find_by_id(user_id)
            .await
            .map_err(|e| DeleteUserError::RepositoryError(e.to_string()))?
            .ok_or(DeleteUserError::NotFound)?;

        if !caller.is_user(user_id) {
            return Err(DeleteUserError::Forbidden);
        }

        self.repo.delete_user(user_id).await.map_err(|e| match e {
            UserRepositoryError::NotFound => DeleteUserError::NotFound,
            other => DeleteUserError::RepositoryError(other.to_string()),
        })?;

        tracing::info!(user_id = %user_id, "User deleted");
        Ok(())
    }
}
