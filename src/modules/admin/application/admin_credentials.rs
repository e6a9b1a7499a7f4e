use std::env;

/// The single operator account. There is no admin table.
#[derive(Debug, Clone)]
pub struct AdminCredentials {
    pub email: String,
    pub password: String,
}

impl AdminCredentials {
    pub const DEFAULT_EMAIL: &'static str = "admin@justicenest.com";
    pub const DEFAULT_PASSWORD: &'static str = "admin123";

    /// Reads `ADMIN_EMAIL` / `ADMIN_PASSWORD`, falling back to the development defaults.
    pub fn from_env() -> Self {
        let email = env::var("ADMIN_EMAIL").unwrap_or_else(|_| Self::DEFAULT_EMAIL.to_string());
        let password =
            env::var("ADMIN_PASSWORD").unwrap_or_else(|_| Self::DEFAULT_PASSWORD.to_string());

        if password == Self::DEFAULT_PASSWORD {
            tracing::warn!("ADMIN_PASSWORD is not set; using the development default");
        }

        Self { email, password }
    }

    /// Email compares case-insensitively, password exactly.
    pub fn matches(&self, email: &str, password: &str) -> bool {
        email.trim().eq_ignore_ascii_case(&self.email) && password == self.password
    }
}

impl Default for AdminCredentials {
    fn default() -> Self {
        Self {
            email: Self::DEFAULT_EMAIL.to_string(),
            password: Self::DEFAULT_PASSWORD.to_string(),
        }
    }
}
