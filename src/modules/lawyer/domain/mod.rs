pub mod lawyer_status;

pub use lawyer_status::{LawyerStatus, LawyerStatusError};
