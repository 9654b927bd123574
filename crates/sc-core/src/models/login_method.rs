use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// How a session was established.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum LoginMethod {
    /// Name lookup only, no credential check.
    Name,
    /// Name lookup after an external wallet handshake.
    Wallet,
    /// Recovery (QR) code match.
    Recovery,
}

impl LoginMethod {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Name => "name",
            Self::Wallet => "wallet",
            Self::Recovery => "recovery",
        }
    }
}

impl fmt::Display for LoginMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LoginMethod {
    type Err = CoreError;

    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "name" => Ok(Self::Name),
            "wallet" => Ok(Self::Wallet),
            "recovery" => Ok(Self::Recovery),
            _ => Err(CoreError::InvalidLoginMethod {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
