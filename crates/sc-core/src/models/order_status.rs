use crate::{CoreError, CoreResult};

use std::fmt;
use std::panic::Location;
use std::str::FromStr;

use error_location::ErrorLocation;
use serde::{Deserialize, Serialize};

/// Reservation lifecycle as recorded on the contract.
///
/// The wire values are the ones the deployed contract stores.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum OrderStatus {
    #[serde(rename = "creado")]
    Created,
    #[serde(rename = "preparando")]
    Preparing,
    #[serde(rename = "listo")]
    Ready,
    #[serde(rename = "entregado")]
    Delivered,
    #[serde(rename = "cancelado")]
    Cancelled,
    #[serde(rename = "desconocido")]
    Unknown,
}

impl OrderStatus {
    /// Statuses a user may move an order into.
    pub const SETTABLE: [OrderStatus; 5] = [
        Self::Created,
        Self::Preparing,
        Self::Ready,
        Self::Delivered,
        Self::Cancelled,
    ];

    pub fn as_str(&self) -> &str {
        match self {
            Self::Created => "creado",
            Self::Preparing => "preparando",
            Self::Ready => "listo",
            Self::Delivered => "entregado",
            Self::Cancelled => "cancelado",
            Self::Unknown => "desconocido",
        }
    }

    /// Rental-facing label.
    pub fn label(&self) -> &str {
        match self {
            Self::Created => "Pending",
            Self::Preparing => "Confirmed",
            Self::Ready => "In progress",
            Self::Delivered => "Finished",
            Self::Cancelled => "Cancelled",
            Self::Unknown => "Unknown",
        }
    }

    /// Parses a stored value, mapping anything unrecognised to `Unknown`.
    pub fn from_contract(value: &str) -> Self {
        Self::from_str(value).unwrap_or(Self::Unknown)
    }
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for OrderStatus {
    type Err = CoreError;

    /// Accepts the settable statuses only; `desconocido` is never written.
    #[track_caller]
    fn from_str(s: &str) -> CoreResult<Self> {
        match s {
            "creado" => Ok(Self::Created),
            "preparando" => Ok(Self::Preparing),
            "listo" => Ok(Self::Ready),
            "entregado" => Ok(Self::Delivered),
            "cancelado" => Ok(Self::Cancelled),
            _ => Err(CoreError::InvalidOrderStatus {
                value: s.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
