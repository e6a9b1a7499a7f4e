pub mod complaint_status;

pub use complaint_status::{ComplaintId, ComplaintStatus};
