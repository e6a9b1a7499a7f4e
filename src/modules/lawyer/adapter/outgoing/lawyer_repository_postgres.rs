use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, PaginatorTrait,
    QueryFilter, QueryOrder, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::LawyerId;
use crate::lawyer::adapter::outgoing::sea_orm_entity::lawyers::{
    self, ActiveModel, Column, Entity,
};
use crate::lawyer::application::ports::outgoing::lawyer_repository::{
    CreateLawyerData, LawyerCredentials, LawyerRepository, LawyerRepositoryError, LawyerResult,
    PatchLawyerData,
};
use crate::lawyer::domain::LawyerStatus;

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct LawyerRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl LawyerRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl LawyerRepository for LawyerRepositoryPostgres {
    async fn create_lawyer(
        &self,
        data: CreateLawyerData,
    ) -> Result<LawyerResult, LawyerRepositoryError> {
        let model = ActiveModel {
            name: Set(data.name),
            email: Set(data.email),
            phone_number: Set(data.phone_number),
            city: Set(data.city),
            state: Set(data.state),
            specialization: Set(data.specialization),
            years_of_experience: Set(data.years_of_experience),
            gender: Set(data.gender),
            fees_range: Set(data.fees_range),
            id_proof_url: Set(data.id_proof_url),
            photo_url: Set(data.photo_url),
            password: Set(data.password_hash),
            status: Set(LawyerStatus::Pending.as_str().to_string()),
            is_active: Set(true),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_email_error)?;

        model_to_result(inserted)
    }

    async fn find_by_id(
        &self,
        id: LawyerId,
    ) -> Result<Option<LawyerResult>, LawyerRepositoryError> {
        Entity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_result)
            .transpose()
    }

    async fn find_active_by_id(
        &self,
        id: LawyerId,
    ) -> Result<Option<LawyerResult>, LawyerRepositoryError> {
        Entity::find()
            .filter(Column::Id.eq(id.value()))
            .filter(Column::IsActive.eq(true))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
            .map(model_to_result)
            .transpose()
    }

    async fn find_credentials_by_email(
        &self,
        email: &str,
    ) -> Result<Option<LawyerCredentials>, LawyerRepositoryError> {
        let Some(model) = Entity::find()
            .filter(Column::Email.eq(email))
            .one(&*self.db)
            .await
            .map_err(map_db_err)?
        else {
            return Ok(None);
        };

        let password_hash = model.password.clone();
        Ok(Some(LawyerCredentials {
            lawyer: model_to_result(model)?,
            password_hash,
        }))
    }

    async fn email_exists(&self, email: &str) -> Result<bool, LawyerRepositoryError> {
        let count = Entity::find()
            .filter(Column::Email.eq(email))
            .count(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(count > 0)
    }

    async fn list_active_by_status(
        &self,
        status: LawyerStatus,
    ) -> Result<Vec<LawyerResult>, LawyerRepositoryError> {
        Entity::find()
            .filter(Column::Status.eq(status.as_str()))
            .filter(Column::IsActive.eq(true))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?
            .into_iter()
            .map(model_to_result)
            .collect()
    }

    async fn patch_lawyer(
        &self,
        id: LawyerId,
        data: PatchLawyerData,
    ) -> Result<LawyerResult, LawyerRepositoryError> {
        if data.is_empty() {
            return self
                .find_active_by_id(id)
                .await?
                .ok_or(LawyerRepositoryError::NotFound);
        }

        let mut model = <ActiveModel as Default>::default();

        if let Some(v) = data.name {
            model.name = Set(v);
        }
        if let Some(v) = data.phone_number {
            model.phone_number = Set(v);
        }
        if let Some(v) = data.city {
            model.city = Set(Some(v));
        }
        if let Some(v) = data.state {
            model.state = Set(Some(v));
        }
        if let Some(v) = data.specialization {
            model.specialization = Set(Some(v));
        }
        if let Some(v) = data.years_of_experience {
            model.years_of_experience = Set(v);
        }
        if let Some(v) = data.gender {
            model.gender = Set(Some(v));
        }
        if let Some(v) = data.fees_range {
            model.fees_range = Set(v);
        }
        if let Some(v) = data.photo_url {
            model.photo_url = Set(v);
        }
        if let Some(v) = data.password_hash {
            model.password = Set(v);
        }

        let results = Entity::update_many()
            .set(model)
            .filter(Column::Id.eq(id.value()))
            .filter(Column::IsActive.eq(true))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        results
            .into_iter()
            .next()
            .ok_or(LawyerRepositoryError::NotFound)
            .and_then(model_to_result)
    }

    async fn deactivate(&self, id: LawyerId) -> Result<(), LawyerRepositoryError> {
        let result = Entity::update_many()
            .col_expr(Column::IsActive, Expr::value(false))
            .filter(Column::Id.eq(id.value()))
            .filter(Column::IsActive.eq(true))
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(LawyerRepositoryError::NotFound);
        }

        Ok(())
    }

    async fn update_status(
        &self,
        id: LawyerId,
        from: LawyerStatus,
        to: LawyerStatus,
    ) -> Result<LawyerResult, LawyerRepositoryError> {
        let results = Entity::update_many()
            .col_expr(Column::Status, Expr::value(to.as_str()))
            .filter(Column::Id.eq(id.value()))
            .filter(Column::Status.eq(from.as_str()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        match results.into_iter().next() {
            Some(model) => model_to_result(model),
            None => match self.find_by_id(id).await? {
                Some(_) => Err(LawyerRepositoryError::StatusChanged(from)),
                None => Err(LawyerRepositoryError::NotFound),
            },
        }
    }
}

// ============================================================================
// Helper Functions
// ============================================================================

fn model_to_result(model: lawyers::Model) -> Result<LawyerResult, LawyerRepositoryError> {
    let status = model
        .status
        .parse::<LawyerStatus>()
        .map_err(|e| LawyerRepositoryError::DatabaseError(e.to_string()))?;

    Ok(LawyerResult {
        id: LawyerId::from(model.id),
        name: model.name,
        email: model.email,
        phone_number: model.phone_number,
        city: model.city,
        state: model.state,
        specialization: model.specialization,
        years_of_experience: model.years_of_experience,
        gender: model.gender,
        fees_range: model.fees_range,
        id_proof_url: model.id_proof_url,
        photo_url: model.photo_url,
        status,
        is_active: model.is_active,
        created_at: model.created_at.into(),
    })
}

fn map_email_error(e: DbErr) -> LawyerRepositoryError {
    let msg = e.to_string().to_lowercase();

    if msg.contains("duplicate") || msg.contains("unique") || msg.contains("23505") {
        LawyerRepositoryError::EmailAlreadyExists
    } else {
        LawyerRepositoryError::DatabaseError(e.to_string())
    }
}

fn map_db_err(e: DbErr) -> LawyerRepositoryError {
    LawyerRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use maplit::btreemap;
    use sea_orm::{DatabaseBackend, MockDatabase, MockExecResult, Value};

    fn lawyer_model(id: i32, status: &str, is_active: bool) -> lawyers::Model {
        lawyers::Model {
            id,
            name: "Meera Iyer".to_string(),
            email: format!("lawyer{}@example.com", id),
            phone_number: "9876543210".to_string(),
            city: Some("Pune".to_string()),
            state: Some("Maharashtra".to_string()),
            specialization: Some("Family law".to_string()),
            years_of_experience: 6.5,
            gender: None,
            fees_range: "2000-5000".to_string(),
            id_proof_url: "https://cdn.test/lawyers/id_proof/a.png".to_string(),
            photo_url: "https://cdn.test/lawyers/photo/a.png".to_string(),
            password: "hash".to_string(),
            status: status.to_string(),
            is_active,
            created_at: Utc::now().fixed_offset(),
        }
    }

    fn create_data() -> CreateLawyerData {
        CreateLawyerData {
            name: "Meera Iyer".to_string(),
            email: "lawyer1@example.com".to_string(),
            phone_number: "9876543210".to_string(),
            city: Some("Pune".to_string()),
            state: None,
            specialization: None,
            years_of_experience: 6.5,
            gender: None,
            fees_range: "2000-5000".to_string(),
            id_proof_url: "https://cdn.test/a".to_string(),
            photo_url: "https://cdn.test/b".to_string(),
            password_hash: "hash".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_lawyer_starts_pending() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![lawyer_model(1, "pending", true)]])
            .into_connection();

        let repo = LawyerRepositoryPostgres::new(Arc::new(db));
        let lawyer = repo.create_lawyer(create_data()).await.unwrap();

        assert_eq!(lawyer.id, LawyerId::from(1));
        assert_eq!(lawyer.status, LawyerStatus::Pending);
        assert!(lawyer.is_active);
    }

    #[tokio::test]
    async fn test_create_lawyer_duplicate_email() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_errors(vec![DbErr::Custom(
                "duplicate key value violates unique constraint \"lawyers_email_key\"".to_string(),
            )])
            .into_connection();

        let repo = LawyerRepositoryPostgres::new(Arc::new(db));
        let result = repo.create_lawyer(create_data()).await;

        assert_eq!(result.unwrap_err(), LawyerRepositoryError::EmailAlreadyExists);
    }

    #[tokio::test]
    async fn test_unknown_status_in_row_is_database_error() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![lawyer_model(1, "suspended", true)]])
            .into_connection();

        let repo = LawyerRepositoryPostgres::new(Arc::new(db));
        let result = repo.find_by_id(LawyerId::from(1)).await;

        assert!(matches!(result, Err(LawyerRepositoryError::DatabaseError(_))));
    }

    #[tokio::test]
    async fn test_list_active_by_status() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![
                lawyer_model(1, "approved", true),
                lawyer_model(2, "approved", true),
            ]])
            .into_connection();

        let repo = LawyerRepositoryPostgres::new(Arc::new(db));
        let lawyers = repo
            .list_active_by_status(LawyerStatus::Approved)
            .await
            .unwrap();

        assert_eq!(lawyers.len(), 2);
        assert!(lawyers.iter().all(|l| l.status == LawyerStatus::Approved));
    }

    #[tokio::test]
    async fn test_email_exists() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![btreemap! {
                "num_items" => Value::BigInt(Some(0)),
            }]])
            .into_connection();

        let repo = LawyerRepositoryPostgres::new(Arc::new(db));
        assert!(!repo.email_exists("new@example.com").await.unwrap());
    }

    #[tokio::test]
    async fn test_patch_inactive_lawyer_is_not_found() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<lawyers::Model>::new()])
            .into_connection();

        let repo = LawyerRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .patch_lawyer(
                LawyerId::from(1),
                PatchLawyerData {
                    city: Some("Nagpur".to_string()),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result.unwrap_err(), LawyerRepositoryError::NotFound);
    }

    #[tokio::test]
    async fn test_deactivate() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_exec_results(vec![
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 1,
                },
                MockExecResult {
                    last_insert_id: 0,
                    rows_affected: 0,
                },
            ])
            .into_connection();

        let repo = LawyerRepositoryPostgres::new(Arc::new(db));

        assert!(repo.deactivate(LawyerId::from(1)).await.is_ok());
        assert_eq!(
            repo.deactivate(LawyerId::from(1)).await.unwrap_err(),
            LawyerRepositoryError::NotFound
        );
    }

    #[tokio::test]
    async fn test_update_status_success() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![vec![lawyer_model(1, "approved", true)]])
            .into_connection();

        let repo = LawyerRepositoryPostgres::new(Arc::new(db));
        let lawyer = repo
            .update_status(LawyerId::from(1), LawyerStatus::Pending, LawyerStatus::Approved)
            .await
            .unwrap();

        assert_eq!(lawyer.status, LawyerStatus::Approved);
    }

    #[tokio::test]
    async fn test_update_status_lost_race() {
        let db = MockDatabase::new(DatabaseBackend::Postgres)
            .append_query_results(vec![Vec::<lawyers::Model>::new()])
            .append_query_results(vec![vec![lawyer_model(1, "rejected", true)]])
            .into_connection();

        let repo = LawyerRepositoryPostgres::new(Arc::new(db));
        let result = repo
            .update_status(LawyerId::from(1), LawyerStatus::Pending, LawyerStatus::Approved)
            .await;

        assert_eq!(
            result.unwrap_err(),
            LawyerRepositoryError::StatusChanged(LawyerStatus::Pending)
        );
    }
}
