pub mod accept_complaint_service;
pub mod create_complaint_service;
pub mod delete_complaint_service;
pub mod get_complaint_service;
pub mod list_complaints_service;
pub mod update_complaint_service;

pub use accept_complaint_service::AcceptComplaintService;
pub use create_complaint_service::CreateComplaintService;
pub use delete_complaint_service::DeleteComplaintService;
pub use get_complaint_service::GetComplaintService;
pub use list_complaints_service::{
    ListLawyerComplaintsService, ListPendingComplaintsService, ListUserComplaintsService,
};
pub use update_complaint_service::UpdateComplaintService;
