pub mod delete_user_service;
pub mod get_user_service;
pub mod login_user_service;
pub mod signup_user_service;
pub mod update_user_service;

pub use delete_user_service::DeleteUserService;
pub use get_user_service::GetUserService;
pub use login_user_service::LoginUserService;
pub use signup_user_service::SignupUserService;
pub use update_user_service::UpdateUserService;
