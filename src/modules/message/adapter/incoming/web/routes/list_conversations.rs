use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::message::application::ports::incoming::use_cases::ListConversationsError;
use crate::message::domain::ConversationParty;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[get("/messages/conversations/{role}/{id}")]
pub async fn list_conversations_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<(String, i32)>,
    data: web::Data<AppState>,
) -> impl Responder {
    let (role, id) = path.into_inner();

    let party = match ConversationParty::parse(&role, id) {
        Ok(party) => party,
        Err(e) => return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string()),
    };

    match data
        .message
        .conversations
        .execute(caller.principal, party)
        .await
    {
        Ok(conversations) => ApiResponse::success(conversations),

        Err(e @ ListConversationsError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", &e.to_string())
        }

        Err(ListConversationsError::RepositoryError(e)) => {
            error!(error = %e, role = %role, id, "Failed to list conversations");
            ApiResponse::internal_error()
        }
    }
}
