pub mod api;
pub mod validation;
