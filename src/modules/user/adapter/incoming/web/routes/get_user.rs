use actix_web::{get, web, Responder};
use tracing::error;

use crate::auth::adapter::incoming::web::extractors::AuthenticatedPrincipal;
use crate::auth::application::domain::entities::UserId;
use crate::shared::api::ApiResponse;
use crate::user::application::ports::incoming::use_cases::GetUserError;
use crate::AppState;

#[get("/users/{user_id}")]
pub async fn get_user_handler(
    caller: AuthenticatedPrincipal,
    path: web::Path<i32>,
    data: web::Data<AppState>,
) -> impl Responder {
    let user_id = UserId::from(path.into_inner());

    match data.user.get.execute(caller.principal, user_id).await {
        Ok(user) => ApiResponse::success(user),

        Err(GetUserError::NotFound) => ApiResponse::not_found("USER_NOT_FOUND", "User not found"),

        Err(GetUserError::Forbidden) => {
            ApiResponse::forbidden("FORBIDDEN", "You can only access your own profile")
        }

        Err(GetUserError::RepositoryError(e)) => {
            error!(error = %e, user_id = %user_id, "Failed to load user");
            ApiResponse::internal_error()
        }
    }
}
