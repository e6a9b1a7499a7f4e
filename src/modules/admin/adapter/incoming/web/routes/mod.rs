pub mod admin_login;
pub mod admin_stats;
pub mod pending_lawyers;
pub mod review_lawyer;

pub use admin_login::{admin_login_handler, AdminSessionResponse};
pub use admin_stats::admin_stats_handler;
pub use pending_lawyers::pending_lawyers_handler;
pub use review_lawyer::{approve_lawyer_handler, reject_lawyer_handler};
