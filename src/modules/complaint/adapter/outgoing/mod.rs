pub mod complaint_repository_postgres;
pub mod sea_orm_entity;

pub use complaint_repository_postgres::ComplaintRepositoryPostgres;
