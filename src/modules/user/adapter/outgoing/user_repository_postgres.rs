use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::UserId;
use crate::user::adapter::outgoing::sea_orm_entity::users::{self, ActiveModel, Column, Entity};
use crate::user::application::ports::outgoing::user_repository::{
    CreateUserData, PatchUserData, UserCredentials, UserRepository, UserRepositoryError,
    UserResult,
};

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct UserRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl UserRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserRepository for UserRepositoryPostgres {
    async fn create_user(&self, data: CreateUserData) -> Result<UserResult, UserRepositoryError> {
        let model = ActiveModel {
            name: Set(data.name),
            email: Set(data.email),
            password: Set(data.password_hash),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_email_error)?;

        Ok(model_to_result(inserted))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<UserResult>, UserRepositoryError> {
        let found = Entity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(model_to_result))
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<UserCredentials>, UserRepositoryError> {
        let found = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(|model| {
            let password_hash = model.password.clone();
            UserCredentials {
                user: model_to_result(model),
                password_hash,
            }
        }))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, UserRepositoryError> {
        let count = Entity::find()
            .filter(Column::Email.eq(email))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn patch_user(
        &self,
        id: UserId,
        data: PatchUserData,
    ) -> Result<UserResult, UserRepositoryError> {
        let mut model = <ActiveModel as Default>::default();

        if let Some(name) = data.name {
            model.name = Set(name);
        }

        if let Some(email) = data.email {
            model.email = Set(email);
        }

        if !model.name.is_set() && !model.email.is_set() {
            return self
                .find_by_id(id)
                .await?
                .ok_or(UserRepositoryError::NotFound);
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_email_error)?;

        results
            .into_iter()
            .next()
            .map(model_to_result)
            .ok_or(UserRepositoryError::NotFound)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), UserRepositoryError> {
        let result = Entity::delete_by_id(id.value())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(UserRepositoryError::NotFound);
        }

        Ok(())
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: users::Model) -> UserResult {
    UserResult {
        id: UserId::from(model.id),
        name: model.name,
        email: model.email,
        created_at: model.created_at.into(),
    }
}

fn map_email_error(e: DbErr) -> UserRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        UserRepositoryError::EmailAlreadyExists
    } else {
        UserRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> UserRepositoryError {
    UserRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
