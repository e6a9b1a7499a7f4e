use actix_web::{delete, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::DeleteUserError;
use crate::AppState;

#[delete("/users/{user_id}")]
pub async fn delete_user_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.user.delete.execute(caller.principal, user_id).await {
        Ok(()) => ApiResponse::message("User deleted successfully"),

        Err(DeleteUserError::NotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(DeleteUserError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only delete your own account")
        }

        Err(DeleteUserError::RepositoryError(e)) => {
            error!(error = %e, user_id = %user_id, "Failed to delete user");
            ApiResponse::internal_error()
        }
    }
}
