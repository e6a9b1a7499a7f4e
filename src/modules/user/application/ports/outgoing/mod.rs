pub mod user_repository;

pub use user_repository::{
    CreateUserData, PatchUserData, UserCredentials, UserRepository, UserRepositoryError,
    UserResult,
};
