use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Complaints::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Complaints::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Complaints::UserId).integer().not_null())
                    .col(ColumnDef::new(Complaints::LawyerId).integer().null())
                    .col(ColumnDef::new(Complaints::Name).string_len(100).not_null())
                    .col(ColumnDef::new(Complaints::Number).string_len(15).not_null())
                    .col(ColumnDef::new(Complaints::City).string_len(100).not_null())
                    .col(ColumnDef::new(Complaints::State).string_len(100).not_null())
                    .col(ColumnDef::new(Complaints::Gender).string_len(20).not_null())
                    .col(ColumnDef::new(Complaints::ComplaintDetails).text().not_null())
                    .col(ColumnDef::new(Complaints::ComplaintFileUrl).text().null())
                    .col(
                        ColumnDef::new(Complaints::Status)
                            .string_len(50)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Complaints::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaints_user_id")
                            .from(Complaints::Table, Complaints::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_complaints_lawyer_id")
                            .from(Complaints::Table, Complaints::LawyerId)
                            .to(Lawyers::Table, Lawyers::Id)
                            .on_delete(ForeignKeyAction::SetNull)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_complaints_user_id
                ON complaints (user_id);
                CREATE INDEX IF NOT EXISTS idx_complaints_lawyer_id
                ON complaints (lawyer_id);
                CREATE INDEX IF NOT EXISTS idx_complaints_status
                ON complaints (status);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                DROP INDEX IF EXISTS idx_complaints_user_id;
                DROP INDEX IF EXISTS idx_complaints_lawyer_id;
                DROP INDEX IF EXISTS idx_complaints_status;
                "#,
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Complaints::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Complaints {
    Table,
    Id,
    UserId,
    LawyerId,
    Name,
    Number,
    City,
    State,
    Gender,
    ComplaintDetails,
    ComplaintFileUrl,
    Status,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Users {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Lawyers {
    Table,
    Id,
}
