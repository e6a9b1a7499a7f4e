pub mod admin_login;
pub mod get_admin_stats;
pub mod list_pending_lawyers;
pub mod review_lawyer;

pub use admin_login::{AdminLoginError, AdminLoginUseCase, AdminSession};
pub use get_admin_stats::{GetAdminStatsError, GetAdminStatsUseCase};
pub use list_pending_lawyers::{ListPendingLawyersError, ListPendingLawyersUseCase};
pub use review_lawyer::{ReviewLawyerError, ReviewLawyerUseCase};
