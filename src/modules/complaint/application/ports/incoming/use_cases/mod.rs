pub mod accept_complaint;
pub mod create_complaint;
pub mod delete_complaint;
pub mod get_complaint;
pub mod list_complaints;
pub mod update_complaint;

pub use accept_complaint::{AcceptComplaintError, AcceptComplaintUseCase};
pub use create_complaint::{
    CreateComplaintCommand, CreateComplaintCommandError, CreateComplaintError,
    CreateComplaintForm, CreateComplaintUseCase,
};
pub use delete_complaint::{DeleteComplaintError, DeleteComplaintUseCase};
pub use get_complaint::{GetComplaintError, GetComplaintUseCase};
pub use list_complaints::{
    ListComplaintsError, ListLawyerComplaintsUseCase, ListPendingComplaintsUseCase,
    ListUserComplaintsUseCase,
};
pub use update_complaint::{
    UpdateComplaintCommand, UpdateComplaintCommandError, UpdateComplaintError,
    UpdateComplaintForm, UpdateComplaintUseCase,
};
