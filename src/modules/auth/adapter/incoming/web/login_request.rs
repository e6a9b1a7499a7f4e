use serde::Deserialize;
use utoipa::ToSchema;

use crate::auth::application::domain::credentials::{Credentials, CredentialsError};

/// Body accepted by the user, lawyer and admin login endpoints.
#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginRequestDto {
    #[schema(example = "asha@example.com")]
    pub email: String,

    #[schema(example = "SecurePass123!")]
    pub password: String,
}

impl LoginRequestDto {
    pub fn into_credentials(self) -> Result<Credentials, CredentialsError> {
        Credentials::new(self.email, self.password)
    }
}
