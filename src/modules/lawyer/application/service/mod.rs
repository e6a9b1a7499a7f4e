pub mod delete_lawyer_service;
pub mod get_lawyer_service;
pub mod list_lawyers_service;
pub mod login_lawyer_service;
pub mod register_lawyer_service;
pub mod update_lawyer_service;

pub use delete_lawyer_service::DeleteLawyerService;
pub use get_lawyer_service::GetLawyerService;
pub use list_lawyers_service::ListLawyersService;
pub use login_lawyer_service::LoginLawyerService;
pub use register_lawyer_service::RegisterLawyerService;
pub use update_lawyer_service::UpdateLawyerService;
