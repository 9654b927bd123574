use sc_core::CoreError;

use std::panic::Location;
use std::result::Result as StdResult;

use error_location::ErrorLocation;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("Wallet is not connected {location}")]
    WalletNotConnected { location: ErrorLocation },

    #[error("Wallet address unavailable: {message} {location}")]
    WalletAddress {
        message: String,
        location: ErrorLocation,
    },

    #[error("User declined to sign {method} {location}")]
    UserDeclined {
        method: String,
        location: ErrorLocation,
    },

    #[error("Network error: {message} {location}")]
    Network {
        message: String,
        location: ErrorLocation,
    },

    #[error("Simulation of {method} failed: {message} {location}")]
    Simulation {
        method: String,
        message: String,
        location: ErrorLocation,
    },

    #[error("Provider error: {message} {location}")]
    Provider {
        message: String,
        location: ErrorLocation,
    },

    #[error("{what} not found {location}")]
    NotFound {
        what: String,
        location: ErrorLocation,
    },

    #[error("Invalid input: {source} {location}")]
    Validation {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },
}

impl ContractError {
    #[track_caller]
    pub fn wallet_not_connected() -> Self {
        Self::WalletNotConnected {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn wallet_address(message: impl Into<String>) -> Self {
        Self::WalletAddress {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn user_declined(method: impl Into<String>) -> Self {
        Self::UserDeclined {
            method: method.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn network(message: impl Into<String>) -> Self {
        Self::Network {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn simulation(method: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Simulation {
            method: method.into(),
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn not_found(what: impl Into<String>) -> Self {
        Self::NotFound {
            what: what.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Message suitable for showing to the person at the keyboard.
    pub fn user_message(&self) -> String {
        match self {
            Self::WalletNotConnected { .. } => NOT_CONNECTED_MESSAGE.to_string(),
            Self::WalletAddress { .. } => "Could not read the wallet address.".to_string(),
            Self::UserDeclined { .. } => DECLINED_MESSAGE.to_string(),
            Self::Network { message, .. }
            | Self::Simulation { message, .. }
            | Self::Provider { message, .. } => friendly_message(message),
            Self::NotFound { what, .. } => format!("{what} not found"),
            Self::Validation { source, .. } => match source {
                CoreError::Validation { field, message, .. } => format!("{field} {message}"),
                other => other.to_string(),
            },
        }
    }
}

impl From<CoreError> for ContractError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Validation {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

const DECLINED_MESSAGE: &str = "Transaction was cancelled in the wallet.";
const NOT_CONNECTED_MESSAGE: &str = "Wallet is not connected. Connect your wallet and try again.";
const BALANCE_MESSAGE: &str = "Insufficient balance to complete the transaction.";
const NETWORK_MESSAGE: &str = "Network error. Check your connection and try again.";

/// Rewrites well-known provider failures into friendlier text.
///
/// Anything not recognised is returned unchanged.
pub fn friendly_message(raw: &str) -> String {
    let lower = raw.to_lowercase();

    let friendly = if lower.contains("declined") || lower.contains("rejected") {
        DECLINED_MESSAGE
    } else if lower.contains("not connected") {
        NOT_CONNECTED_MESSAGE
    } else if lower.contains("insufficient balance") {
        BALANCE_MESSAGE
    } else if ["network", "fetch", "timeout"]
        .iter()
        .any(|needle| lower.contains(needle))
    {
        NETWORK_MESSAGE
    } else {
        return raw.to_string();
    };

    friendly.to_string()
}

pub type Result<T> = StdResult<T, ContractError>;
