use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;

use crate::auth::application::domain::entities::UserId;
use crate::user::application::ports::outgoing::user_repository::{
    CreateUserData, PatchUserData, UserCredentials, UserRepository, UserRepositoryError,
    UserResult,
};

struct StoredUser {
    user: UserResult,
    password_hash: String,
}

/// Vec-backed repository; `fail_with` makes every call return that error.
#[derive(Default)]
pub struct InMemoryUserRepository {
    rows: Mutex<Vec<StoredUser>>,
    fail_with: Option<UserRepositoryError>,
}

impl InMemoryUserRepository {
    pub fn failing(err: UserRepositoryError) -> Self {
        Self {
            rows: Mutex::new(Vec::new()),
            fail_with: Some(err),
        }
    }

    pub fn with_user(self, id: i32, name: &str, email: &str, password_hash: &str) -> Self {
        self.rows.lock().unwrap().push(StoredUser {
            user: user_result(id, name, email),
            password_hash: password_hash.to_string(),
        });
        self
    }

    pub fn stored_hash(&self, email: &str) -> Option<String> {
        self.rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user.email == email)
            .map(|r| r.password_hash.clone())
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    fn check(&self) -> Result<(), UserRepositoryError> {
        match &self.fail_with {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }
}

pub fn user_result(id: i32, name: &str, email: &str) -> UserResult {
    UserResult {
        id: UserId::from(id),
        name: name.to_string(),
        email: email.to_string(),
        created_at: Utc::now(),
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();

        if rows.iter().any(|r| r.user.email == data.email) {
            return Err(UserRepositoryError::EmailAlreadyExists);
        }

        let id = rows.iter().map(|r| r.user.id.value()).max().unwrap_or(0) + 1;
        let user = user_result(id, &data.name, &data.email);
        rows.push(StoredUser {
            user: user.clone(),
            password_hash: data.password_hash,
        });
        Ok(user)
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserResult>, UserRepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user.id == id)
            .map(|r| r.user.clone()))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserRepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .find(|r| r.user.email == email)
            .map(|r| UserCredentials {
                user: r.user.clone(),
                password_hash: r.password_hash.clone(),
            }))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserRepositoryError> {
        self.check()?;
        Ok(self
            .rows
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.user.email == email))
    }

    async fn patch_user(
        &self,
        id: UserId,
        data: PatchUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();

        if let Some(email) = &data.email {
            if rows
                .iter()
                .any(|r| r.user.id != id && &r.user.email == email)
            {
                return Err(UserRepositoryError::EmailAlreadyExists);
            }
        }

        let row = rows
            .iter_mut()
            .find(|r| r.user.id == id)
            .ok_or(UserRepositoryError::NotFound)?;

        if let Some(name) = data.name {
            row.user.name = name;
        }
        if let Some(email) = data.email {
            row.user.email = email;
        }
        Ok(row.user.clone())
    }

    async fn delete_user(&self, id: UserId) -> Result<(), UserRepositoryError> {
        self.check()?;
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|r| r.user.id != id);

        if rows.len() == before {
            return Err(UserRepositoryError::NotFound);
        }
        Ok(())
    }
}
