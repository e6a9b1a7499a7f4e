pub mod credentials;
pub mod entities;

pub use credentials::{normalize_email, Credentials, CredentialsError, EmailError};
pub use entities::{LawyerId, Principal, Role, UserId};
