use async_trait::async_trait;

use crate::auth::application::domain::entities::{Principal, UserId};
use crate::user::application::ports::incoming::use_cases::{GetUserError, GetUserUseCase};
use crate::user::application::ports::outgoing::user_repository::{UserRepository, UserResult};

pub struct GetUserService<R>
where
    R: UserRepository,
{
    repo: R,
}

impl<R> GetUserService<R>
where
    R: UserRepository,
{
    pub fn new(repo: R) -> Self {
        Self { repo }
    }
}

#[async_trait]
impl<R> GetUserUseCase for GetUserService<R>
where
    R: UserRepository + Send + Sync,
{
    async fn execute(&self, caller: Principal, user_id: UserId) -> Result<UserResult, GetUserError> {
        let user = self
            .repo
            .find_by_id(user_id)
            .await
            .map_err(|e| GetUserError::RepositoryError(e.to_string()))?
            .ok_or(GetUserError::NotFound)?;

        if !caller.is_user(user_id) {
            return Err(GetUserError::Forbidden);
        }

        Ok(user)
    }
}
