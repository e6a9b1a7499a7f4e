pub mod lawyer_use_cases;
pub mod ports;
pub mod service;
