use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Review state of a lawyer account. Only admins move it, and only out of `Pending`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LawyerStatus {
    Pending,
    Approved,
    Rejected,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown lawyer status '{0}'")]
pub struct LawyerStatusError(pub String);

impl LawyerStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            LawyerStatus::Pending => "pending",
            LawyerStatus::Approved => "approved",
            LawyerStatus::Rejected => "rejected",
        }
    }

    pub fn is_approved(&self) -> bool {
        matches!(self, LawyerStatus::Approved)
    }

    /// Admin review moves a pending account to `target`; re-applying the current status is a no-op.
    pub fn can_transition_to(&self, target: LawyerStatus) -> bool {
        *self == target || (*self == LawyerStatus::Pending && target != LawyerStatus::Pending)
    }
}

impl FromStr for LawyerStatus {
    type Err = LawyerStatusError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "pending" => Ok(LawyerStatus::Pending),
            "approved" => Ok(LawyerStatus::Approved),
            "rejected" => Ok(LawyerStatus::Rejected),
            other => Err(LawyerStatusError(other.to_string())),
        }
    }
}

impl fmt::Display for LawyerStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
