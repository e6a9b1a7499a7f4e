use serde::Serialize;
use utoipa::ToSchema;

/// Envelope around every 2xx body.
#[derive(Serialize, ToSchema)]
#[serde(bound = "T: Serialize")]
pub struct SuccessResponse<T> {
    #[schema(example = true)]
    pub success: bool,
    pub data: T,
}

/// Envelope around every 4xx/5xx body, as written by `ApiResponse`.
#[derive(Serialize, ToSchema)]
pub struct ErrorResponse {
    #[schema(example = false)]
    pub success: bool,
    pub error: ErrorDetail,
}

#[derive(Serialize, ToSchema)]
pub struct ErrorDetail {
    /// Stable code clients switch on
    #[schema(example = "EMAIL_ALREADY_REGISTERED")]
    pub code: String,

    #[schema(example = "Email already registered")]
    pub message: String,
}
