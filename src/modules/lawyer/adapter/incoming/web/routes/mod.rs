pub mod delete_lawyer;
pub mod get_lawyer;
pub mod list_lawyers;
pub mod login_lawyer;
pub mod register_lawyer;
pub mod update_lawyer;

pub use delete_lawyer::delete_lawyer_handler;
pub use get_lawyer::get_lawyer_handler;
pub use list_lawyers::list_lawyers_handler;
pub use login_lawyer::login_lawyer_handler;
pub use register_lawyer::{register_lawyer_handler, LawyerSessionResponse, RegisterLawyerRequestDoc};
pub use update_lawyer::update_lawyer_handler;
