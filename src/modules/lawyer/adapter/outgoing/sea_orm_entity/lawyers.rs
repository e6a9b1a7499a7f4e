use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "lawyers")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(255))", unique)]
    pub email: String,

    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub phone_number: String,

    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub city: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(100))", nullable)]
    pub state: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(150))", nullable)]
    pub specialization: Option<String>,

    #[sea_orm(column_type = "Double")]
    pub years_of_experience: f64,

    #[sea_orm(column_type = "String(StringLen::N(20))", nullable)]
    pub gender: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub fees_range: String,

    #[sea_orm(column_type = "Text")]
    pub id_proof_url: String,

    #[sea_orm(column_type = "Text")]
    pub photo_url: String,

    #[serde(skip_serializing)]
    pub password: String,

    /// pending | approved | rejected
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub status: String,

    pub is_active: bool,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "crate::complaint::adapter::outgoing::sea_orm_entity::complaints::Entity")]
    Complaints,

    #[sea_orm(has_many = "crate::message::adapter::outgoing::sea_orm_entity::messages::Entity")]
    Messages,
}

impl Related<crate::complaint::adapter::outgoing::sea_orm_entity::complaints::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Complaints.def()
    }
}

impl Related<crate::message::adapter::outgoing::sea_orm_entity::messages::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Messages.def()
    }
}

#[async_trait::async_trait]
impl ActiveModelBehavior for ActiveModel {
    async fn before_save<C>(mut self, _db: &C, _insert: bool) -> Result<Self, DbErr>
    where
        C: ConnectionTrait,
    {
        if let ActiveValue::Set(email) = &self.email {
            self.email = Set(email.trim().to_lowercase());
        }

        Ok(self)
    }
}
