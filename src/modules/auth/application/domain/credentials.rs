use email_address::EmailAddress;
use serde::{Deserialize, Deserializer};

// ========================= Credentials =========================
/// Validated email/password pair shared by the user, lawyer and admin logins.
#[derive(Debug, Clone)]
pub struct Credentials {
    email: String,
    password: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CredentialsError {
    #[error("Email cannot be empty")]
    EmptyEmail,

    #[error("Invalid email format")]
    InvalidEmailFormat,

    #[error("Password cannot be empty")]
    EmptyPassword,
}

impl Credentials {
    pub fn new(email: String, password: String) -> Result<Self, CredentialsError> {
        let email = normalize_email(&email).map_err(|e| match e {
            EmailError::Empty => CredentialsError::EmptyEmail,
            EmailError::InvalidFormat => CredentialsError::InvalidEmailFormat,
        })?;

        if password.trim().is_empty() {
            return Err(CredentialsError::EmptyPassword);
        }

        Ok(Self { email, password })
    }

    /// Lowercased and trimmed.
    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for Credentials {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CredentialsHelper {
            email: String,
            password: String,
        }

        let helper = CredentialsHelper::deserialize(deserializer)?;
        Credentials::new(helper.email, helper.password).map_err(serde::de::Error::custom)
    }
}

// ========================= Email =========================

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum EmailError {
    #[error("Email cannot be empty")]
    Empty,

    #[error("Invalid email format")]
    InvalidFormat,
}

/// Trims, validates and lowercases an email address.
pub fn normalize_email(raw: &str) -> Result<String, EmailError> {
    let email = raw.trim();

    if email.is_empty() {
        return Err(EmailError::Empty);
    }

    if !EmailAddress::is_valid(email) {
        return Err(EmailError::InvalidFormat);
    }

    Ok(email.to_lowercase())
}
