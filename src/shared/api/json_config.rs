// src/shared/api/json_config.rs
use actix_web::web::{JsonConfig, PathConfig};

use crate::shared::api::ApiResponse;

pub fn custom_json_config() -> JsonConfig {
    JsonConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("VALIDATION_ERROR", &message),
        )
        .into()
    })
}

/// Non-numeric ids in the path are a client error, not a missing route.
pub fn custom_path_config() -> PathConfig {
    PathConfig::default().error_handler(|err, _req| {
        let message = err.to_string();
        actix_web::error::InternalError::from_response(
            err,
            ApiResponse::bad_request("INVALID_PATH_PARAMETER", &message),
        )
        .into()
    })
}
