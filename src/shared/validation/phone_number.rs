use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

/// Ten digits, leading digit 6-9.
static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[6-9][0-9]{9}$").expect("phone pattern is a valid regex")
});

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PhoneNumberError {
    #[error("Phone number must be exactly 10 digits starting with 6-9")]
    InvalidFormat,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    pub fn parse(raw: &str) -> Result<Self, PhoneNumberError> {
        let candidate = raw.trim();

        if PHONE_PATTERN.is_match(candidate) {
            Ok(Self(candidate.to_string()))
        } else {
            Err(PhoneNumberError::InvalidFormat)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}
