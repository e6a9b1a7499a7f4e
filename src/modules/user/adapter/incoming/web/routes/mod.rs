pub mod delete_user;
pub mod get_user;
pub mod login_user;
pub mod signup_user;
pub mod update_user;

pub use delete_user::delete_user_handler;
pub use get_user::get_user_handler;
pub use login_user::login_user_handler;
pub use signup_user::{signup_user_handler, SignupUserRequest, UserSessionResponse};
pub use update_user::update_user_handler;
