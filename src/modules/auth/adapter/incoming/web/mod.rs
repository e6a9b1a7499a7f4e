pub mod extractors;
pub mod login_request;

pub use login_request::LoginRequestDto;
