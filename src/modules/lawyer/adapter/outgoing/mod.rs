pub mod lawyer_repository_postgres;
pub mod sea_orm_entity;

pub use lawyer_repository_postgres::LawyerRepositoryPostgres;
