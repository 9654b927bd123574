use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A locally registered user.
///
/// Records are append-only: created by registration, never updated or deleted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Identity {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    pub recovery_code: String,
    pub created_at: DateTime<Utc>,
}

impl Identity {
    pub fn new(name: String, email: Option<String>, recovery_code: String) -> Self {
        Self {
            name,
            email,
            recovery_code,
            created_at: Utc::now(),
        }
    }

    /// Case-insensitive name comparison; `name` is expected to be trimmed.
    pub fn has_name(&self, name: &str) -> bool {
        self.name.to_lowercase() == name.to_lowercase()
    }

    /// Case-insensitive email comparison; `email` is expected to be trimmed.
    pub fn has_email(&self, email: &str) -> bool {
        self.email
            .as_deref()
            .is_some_and(|own| own.to_lowercase() == email.to_lowercase())
    }
}
