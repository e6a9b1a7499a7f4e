pub mod lawyer_repository;

pub use lawyer_repository::{
    CreateLawyerData, LawyerCredentials, LawyerRepository, LawyerRepositoryError, LawyerResult,
    PatchLawyerData,
};
