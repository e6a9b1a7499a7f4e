pub mod json_config;
pub mod multipart_config;
pub mod response;

pub use json_config::{custom_json_config, custom_path_config};
pub use multipart_config::custom_multipart_config;
pub use response::ApiResponse;
