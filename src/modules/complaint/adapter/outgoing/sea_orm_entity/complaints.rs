use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "complaints")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,

    pub user_id: i32,

    /// Null until a lawyer accepts.
    #[sea_orm(nullable)]
    pub lawyer_id: Option<i32>,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub name: String,

    #[sea_orm(column_type = "String(StringLen::N(15))")]
    pub number: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub city: String,

    #[sea_orm(column_type = "String(StringLen::N(100))")]
    pub state: String,

    #[sea_orm(column_type = "String(StringLen::N(20))")]
    pub gender: String,

    #[sea_orm(column_type = "Text")]
    pub complaint_details: String,

    #[sea_orm(column_type = "Text", nullable)]
    pub complaint_file_url: Option<String>,

    #[sea_orm(column_type = "String(StringLen::N(50))")]
    pub status: String,

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
        to = "crate::lawyer::adapter::outgoing::sea_orm_entity::lawyers::Column::Id",
        on_delete = "SetNull"
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
