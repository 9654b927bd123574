use crate::LoginMethod;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// The single active login of this profile.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Session {
    pub name: String,
    pub login_time: DateTime<Utc>,
    pub login_method: LoginMethod,
}

impl Session {
    pub fn new(name: String, login_method: LoginMethod) -> Self {
        Self {
            name,
            login_time: Utc::now(),
            login_method,
        }
    }
}
