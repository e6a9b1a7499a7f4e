use async_trait::async_trait;
use sea_orm::sea_query::Expr;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, FromQueryResult,
    JoinType, QueryFilter, QueryOrder, QuerySelect, RelationTrait, Set,
};
use std::sync::Arc;

use crate::auth::application::domain::entities::{LawyerId, UserId};
use crate::complaint::adapter::outgoing::sea_orm_entity::complaints::{
    self, ActiveModel, Column, Entity, Relation,
};
use crate::complaint::application::ports::outgoing::complaint_repository::{
    ComplaintRepository, ComplaintRepositoryError, ComplaintResult, ComplaintWithLawyer,
    CreateComplaintData, PatchComplaintData,
};
use crate::complaint::domain::{ComplaintId, ComplaintStatus};
use crate::lawyer::adapter::outgoing::sea_orm_entity::lawyers;

// ============================================================================
// Query rows
// ============================================================================

#[derive(Debug, FromQueryResult)]
struct ComplaintWithLawyerRow {
    id: i32,
    user_id: i32,
    lawyer_id: Option<i32>,
    name: String,
    number: String,
    city: String,
    state: String,
    gender: String,
    complaint_details: String,
    complaint_file_url: Option<String>,
    status: String,
    created_at: sea_orm::prelude::DateTimeWithTimeZone,
    lawyer_name: Option<String>,
    lawyer_phone: Option<String>,
}

// ============================================================================
// Repository Implementation
// ============================================================================

#[derive(Clone)]
pub struct ComplaintRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl ComplaintRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }
}

#[async_trait]
impl ComplaintRepository for ComplaintRepositoryPostgres {
    async fn create_complaint(
        &self,
        data: CreateComplaintData,
    ) -> Result<ComplaintResult, ComplaintRepositoryError> {
        let model = ActiveModel {
            user_id: Set(data.user_id.value()),
            lawyer_id: Set(None),
            name: Set(data.name),
            number: Set(data.number),
            city: Set(data.city),
            state: Set(data.state),
            gender: Set(data.gender),
            complaint_details: Set(data.complaint_details),
            complaint_file_url: Set(data.complaint_file_url),
            status: Set(ComplaintStatus::Pending.as_str().to_string()),
            ..Default::default()
        };

        let inserted = model.insert(&*self.db).await.map_err(map_db_err)?;

        Ok(model_to_result(inserted))
    }

    async fn find_by_id(
        &self,
        id: ComplaintId,
    ) -> Result<Option<ComplaintResult>, ComplaintRepositoryError> {
        let found = Entity::find_by_id(id.value())
            .one(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(found.map(model_to_result))
    }

    async fn list_by_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ComplaintWithLawyer>, ComplaintRepositoryError> {
        let rows = Entity::find()
            .select_only()
            .columns([
                Column::Id,
                Column::UserId,
                Column::LawyerId,
                Column::Name,
                Column::Number,
                Column::City,
                Column::State,
                Column::Gender,
                Column::ComplaintDetails,
                Column::ComplaintFileUrl,
                Column::Status,
                Column::CreatedAt,
            ])
            .column_as(lawyers::Column::Name, "lawyer_name")
            .column_as(lawyers::Column::PhoneNumber, "lawyer_phone")
            .join(JoinType::LeftJoin, Relation::Lawyer.def())
            .filter(Column::UserId.eq(user_id.value()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .into_model::<ComplaintWithLawyerRow>()
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(rows.into_iter().map(row_to_result).collect())
    }

    async fn list_by_lawyer(
        &self,
        lawyer_id: LawyerId,
    ) -> Result<Vec<ComplaintResult>, ComplaintRepositoryError> {
        let models = Entity::find()
            .filter(Column::LawyerId.eq(lawyer_id.value()))
            .order_by_desc(Column::CreatedAt)
            .order_by_desc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_result).collect())
    }

    async fn list_pending(&self) -> Result<Vec<ComplaintResult>, ComplaintRepositoryError> {
        let models = Entity::find()
            .filter(Column::Status.eq(ComplaintStatus::Pending.as_str()))
            .order_by_asc(Column::CreatedAt)
            .order_by_asc(Column::Id)
            .all(&*self.db)
            .await
            .map_err(map_db_err)?;

        Ok(models.into_iter().map(model_to_result).collect())
    }

    async fn patch_complaint(
        &self,
        id: ComplaintId,
        data: PatchComplaintData,
    ) -> Result<ComplaintResult, ComplaintRepositoryError> {
        let mut changes = <ActiveModel as Default>::default();

        if let Some(v) = data.name {
            changes.name = Set(v);
        }
        if let Some(v) = data.number {
            changes.number = Set(v);
        }
        if let Some(v) = data.city {
            changes.city = Set(v);
        }
        if let Some(v) = data.state {
            changes.state = Set(v);
        }
        if let Some(v) = data.gender {
            changes.gender = Set(v);
        }
        if let Some(v) = data.complaint_details {
            changes.complaint_details = Set(v);
        }
        if let Some(v) = data.status {
            changes.status = Set(v.as_str().to_string());
        }
        if let Some(v) = data.complaint_file_url {
            changes.complaint_file_url = Set(Some(v));
        }

        if !changes.is_changed() {
            return self
                .find_by_id(id)
                .await?
                .ok_or(ComplaintRepositoryError::NotFound);
        }

        let updated = Entity::update_many()
            .set(changes)
            .filter(Column::Id.eq(id.value()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        updated
            .into_iter()
            .next()
            .map(model_to_result)
            .ok_or(ComplaintRepositoryError::NotFound)
    }

    async fn accept(
        &self,
        id: ComplaintId,
        lawyer_id: LawyerId,
    ) -> Result<ComplaintResult, ComplaintRepositoryError> {
        let updated = Entity::update_many()
            .col_expr(Column::LawyerId, Expr::value(lawyer_id.value()))
            .col_expr(
                Column::Status,
                Expr::value(ComplaintStatus::Accepted.as_str()),
            )
            .filter(Column::Id.eq(id.value()))
            .filter(Column::Status.eq(ComplaintStatus::Pending.as_str()))
            .exec_with_returning(&*self.db)
            .await
            .map_err(map_db_err)?;

        if let Some(model) = updated.into_iter().next() {
            return Ok(model_to_result(model));
        }

        // Nothing matched: either the row is gone or someone accepted it first
        match self.find_by_id(id).await? {
            Some(_) => Err(ComplaintRepositoryError::NotPending),
            None => Err(ComplaintRepositoryError::NotFound),
        }
    }

    async fn delete_complaint(&self, id: ComplaintId) -> Result<(), ComplaintRepositoryError> {
        let result = Entity::delete_by_id(id.value())
            .exec(&*self.db)
            .await
            .map_err(map_db_err)?;

        if result.rows_affected == 0 {
            return Err(ComplaintRepositoryError::NotFound);
        }
        Ok(())
    }
}

fn model_to_result(model: complaints::Model) -> ComplaintResult {
    ComplaintResult {
        id: ComplaintId::from(model.id),
        user_id: UserId::from(model.user_id),
        lawyer_id: model.lawyer_id.map(LawyerId::from),
        name: model.name,
        number: model.number,
        city: model.city,
        state: model.state,
        gender: model.gender,
        complaint_details: model.complaint_details,
        complaint_file_url: model.complaint_file_url,
        status: ComplaintStatus::from(model.status),
        created_at: model.created_at.into(),
    }
}

fn row_to_result(row: ComplaintWithLawyerRow) -> ComplaintWithLawyer {
    ComplaintWithLawyer {
        complaint: ComplaintResult {
            id: ComplaintId::from(row.id),
            user_id: UserId::from(row.user_id),
            lawyer_id: row.lawyer_id.map(LawyerId::from),
            name: row.name,
            number: row.number,
            city: row.city,
            state: row.state,
            gender: row.gender,
            complaint_details: row.complaint_details,
            complaint_file_url: row.complaint_file_url,
            status: ComplaintStatus::from(row.status),
            created_at: row.created_at.into(),
        },
        lawyer_name: row.lawyer_name,
        lawyer_phone: row.lawyer_phone,
    }
}

fn map_db_err(e: DbErr) -> ComplaintRepositoryError {
    ComplaintRepositoryError::DatabaseError(e.to_string())
}

// ============================================================================
// Tests
// ============================================================================
