use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "messages")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    pub lawyer_id: i32,

    /// "user" or "lawyer"
    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub sender_role: String,

    #[sea_orm(column_type = "Text")]
    pub content: String,

    #[sea_orm(column_type = "TimestampWithTimeZone")]
    pub created_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "crate::user::adapter::outgoing::sea_orm_entity::users::Entity",
        from = "Column::UserId",
        to = "crate::user::adapter::outgoing::sea_orm_entity::users::Column::Id",
        on_delete = "Cascade"
    )]
    User,

    #[sea_orm(
        belongs_to = "crate::lawyer::adapter::outgoing::sea_orm_entity::lawyers::Entity",
        from = "Column::LawyerId",
        to = "crate::lawyer::adapter::outgoing::sea_orm_entity::lawyers::Column::Id"
    )]
    Lawyer,
}

impl Related<crate::user::adapter::outgoing::sea_orm_entity::users::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::User.def()
    }
}

impl Related<crate::lawyer::adapter::outgoing::sea_orm_entity::lawyers::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Lawyer.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
