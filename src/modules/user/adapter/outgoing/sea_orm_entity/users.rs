use sea_orm::entity::prelude::*;
use sea_orm::{ActiveModelBehavior, ActiveValue, Set};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(255))", unique)]
    pub email: String,

    /// argon2 PHC string
    #[serde(skip_serializing)]
    pub password: String,

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

        if let ActiveValue::Set(name) = &self.name {
            self.name = Set(name.trim().to_string());
        }

        Ok(self)
    }
}
