pub mod accept_complaint;
pub mod create_complaint;
pub mod delete_complaint;
pub mod get_complaint;
pub mod list_complaints;
pub mod update_complaint;

pub use accept_complaint::accept_complaint_handler;
pub use create_complaint::{create_complaint_handler, CreateComplaintRequestDoc};
pub use delete_complaint::delete_complaint_handler;
pub use get_complaint::get_complaint_handler;
pub use list_complaints::{
    list_lawyer_complaints_handler, list_pending_complaints_handler,
    list_user_complaints_handler,
};
pub use update_complaint::update_complaint_handler;
