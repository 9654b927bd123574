use crate::DEFAULT_REQUIRE_EMAIL;

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RegistrationConfig {
    /// Reject registrations that do not supply an email
    pub require_email: bool,
}

impl Default for RegistrationConfig {
    fn default() -> Self {
        Self {
            require_email: DEFAULT_REQUIRE_EMAIL,
        }
    }
}
