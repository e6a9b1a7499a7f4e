use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComplaintId(i32);

impl ComplaintId {
    pub fn value(&self) -> i32 {
        self.0
    }
}

impl From<i32> for ComplaintId {
    fn from(id: i32) -> Self {
        Self(id)
    }
}

impl fmt::Display for ComplaintId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Complaint progress. `Pending` and `Accepted` drive behaviour; anything the parties
/// write through a generic update past that point is kept verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ComplaintStatus {
    Pending,
    Accepted,
    Resolved,
    Other(String),
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &str {
        match self {
            ComplaintStatus::Pending => "pending",
            ComplaintStatus::Accepted => "accepted",
            ComplaintStatus::Resolved => "resolved",
            ComplaintStatus::Other(s) => s,
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, ComplaintStatus::Pending)
    }
}

impl From<&str> for ComplaintStatus {
    fn from(s: &str) -> Self {
        match s.trim() {
            "pending" => ComplaintStatus::Pending,
            "accepted" => ComplaintStatus::Accepted,
            "resolved" => ComplaintStatus::Resolved,
            other => ComplaintStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for ComplaintStatus {
    fn from(s: String) -> Self {
        ComplaintStatus::from(s.as_str())
    }
}

impl fmt::Display for ComplaintStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for ComplaintStatus {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for ComplaintStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(ComplaintStatus::from(raw))
    }
}
