// src/shared/api/multipart_config.rs
use actix_multipart::form::MultipartFormConfig;

use crate::shared::api::ApiResponse;

/// Default ceiling for a whole multipart body (two images plus text fields).
pub const DEFAULT_MULTIPART_LIMIT: usize = 25 * 1024 * 1024;

pub fn custom_multipart_config() -> MultipartFormConfig {
    let total_limit = std::env::var("MULTIPART_TOTAL_LIMIT_BYTES")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(DEFAULT_MULTIPART_LIMIT);

    MultipartFormConfig::default()
        .total_limit(total_limit)
        .memory_limit(total_limit)
        .error_handler(|err, _req| {
            let message = err.to_string();
            actix_web::error::InternalError::from_response(
                err,
                ApiResponse::bad_request("VALIDATION_ERROR", &message),
            )
            .into()
        })
}
