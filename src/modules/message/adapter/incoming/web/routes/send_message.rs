use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, warn};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::message::application::ports::incoming::use_cases::{
    SendMessageCommand, SendMessageError,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Debug, Deserialize, ToSchema)]
pub struct SendMessageRequest {
    pub user_id: i32,
    pub lawyer_id: i32,
    pub content: String,
    /// Optional; must agree with the caller's token when present.
    #[schema(example = "user")]
    pub sender_role: Option<String>,
}

#[utoipa::path(
    post,
    path = "/messages",
    tag = "messages",
    security(("bearer_auth" = [])),
    request_body = SendMessageRequest,
    responses(
        (status = 200, description = "Message stored"),
        (status = 403, description = "Caller is not the sending party", body = ErrorResponse),
        (status = 500, description = "Referenced user or lawyer does not exist", body = ErrorResponse),
    )
)]
#[post("/messages")]
pub async fn send_message_handler(
    caller: AuthenticatedPrincipal,
    payload: web::Json<SendMessageRequest>,
    data: web::Data<AppState>,
) -> impl Responder {
    let req = payload.into_inner();

    let command =
        match SendMessageCommand::new(req.user_id, req.lawyer_id, req.content, req.sender_role) {
            Ok(cmd) => cmd,
            Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
        };

    match data.message.send.execute(caller.principal, command).await {
        Ok(message) => ApiResponse::success(message),

        Err(e @ SendMessageError::Forbidden) => {
            warn!(email = %caller.email, "Rejected message from non-party");
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(e @ SendMessageError::PersistFailed { .. }) => {
            error!(error = %e, "Failed to store message");
            ApiResponse::upstream_error("MESSAGE_NOT_SAVED", &e.to_string())
        }
    }
}
