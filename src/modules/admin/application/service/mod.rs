pub mod admin_login_service;
pub mod get_admin_stats_service;
pub mod list_pending_lawyers_service;
pub mod review_lawyer_service;

pub use admin_login_service::AdminLoginService;
pub use get_admin_stats_service::GetAdminStatsService;
pub use list_pending_lawyers_service::ListPendingLawyersService;
pub use review_lawyer_service::ReviewLawyerService;
