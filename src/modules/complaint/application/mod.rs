pub mod complaint_use_cases;
pub mod ports;
pub mod service;
