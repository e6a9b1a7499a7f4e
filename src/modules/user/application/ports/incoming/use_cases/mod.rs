pub mod delete_user;
pub mod get_user;
pub mod login_user;
pub mod signup_user;
pub mod update_user;

pub use delete_user::{DeleteUserError, DeleteUserUseCase};
pub use get_user::{GetUserError, GetUserUseCase};
pub use login_user::{LoginUserError, LoginUserUseCase};
pub use signup_user::{
    SignupUserCommand, SignupUserCommandError, SignupUserError, SignupUserUseCase, UserSession,
};
pub use update_user::{
    UpdateUserCommand, UpdateUserCommandError, UpdateUserError, UpdateUserUseCase,
};
