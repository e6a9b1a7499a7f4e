use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Lawyers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Lawyers::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Lawyers::Name).string_len(100).not_null())
                    .col(
                        ColumnDef::new(Lawyers::Email)
                            .string_len(255)
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Lawyers::PhoneNumber).string_len(15).not_null())
                    .col(ColumnDef::new(Lawyers::City).string_len(100).null())
                    .col(ColumnDef::new(Lawyers::State).string_len(100).null())
                    .col(
                        ColumnDef::new(Lawyers::Specialization)
                            .string_len(150)
                            .null(),
                    )
                    .col(ColumnDef::new(Lawyers::YearsOfExperience).double().not_null())
                    .col(ColumnDef::new(Lawyers::Gender).string_len(20).null())
                    .col(ColumnDef::new(Lawyers::FeesRange).string_len(100).not_null())
                    .col(ColumnDef::new(Lawyers::IdProofUrl).text().not_null())
                    .col(ColumnDef::new(Lawyers::PhotoUrl).text().not_null())
                    .col(ColumnDef::new(Lawyers::Password).string_len(255).not_null())
                    .col(
                        ColumnDef::new(Lawyers::Status)
                            .string_len(20)
                            .not_null()
                            .default("pending"),
                    )
                    .col(
                        ColumnDef::new(Lawyers::IsActive)
                            .boolean()
                            .not_null()
                            .default(true),
                    )
                    .col(
                        ColumnDef::new(Lawyers::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        // Public listing and admin review both filter on (status, is_active)
        manager
            .get_connection()
            .execute_unprepared(
                r#"
                CREATE INDEX IF NOT EXISTS idx_lawyers_status_active
                ON lawyers (status, is_active);
                "#,
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .get_connection()
            .execute_unprepared("DROP INDEX IF EXISTS idx_lawyers_status_active;")
            .await?;

        manager
            .drop_table(Table::drop().table(Lawyers::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Lawyers {
    Table,
    Id,
    Name,
    Email,
    PhoneNumber,
    City,
    State,
    Specialization,
    YearsOfExperience,
    Gender,
    FeesRange,
    IdProofUrl,
    PhotoUrl,
    Password,
    Status,
    IsActive,
    CreatedAt,
}
