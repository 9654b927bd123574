use error_location::ErrorLocation;
use sc_config::ConfigError;
use sc_contract::ContractError;
use sc_core::CoreError;
use sc_session::SessionError;

use std::panic::Location;
use std::result::Result as StdResult;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("Configuration error: {source} {location}")]
    Config {
        #[source]
        source: ConfigError,
        location: ErrorLocation,
    },

    #[error("Session error: {source} {location}")]
    Session {
        #[source]
        source: SessionError,
        location: ErrorLocation,
    },

    #[error("Contract error: {source} {location}")]
    Contract {
        #[source]
        source: ContractError,
        location: ErrorLocation,
    },

    #[error("Invalid input: {source} {location}")]
    Input {
        #[source]
        source: CoreError,
        location: ErrorLocation,
    },

    #[error("No active session {location}")]
    NotLoggedIn { location: ErrorLocation },

    #[error("No listed vehicle with model '{model}' {location}")]
    VehicleNotFound {
        model: String,
        location: ErrorLocation,
    },

    #[error("Live network access is not available {location}")]
    LiveNetworkUnavailable { location: ErrorLocation },

    #[error("Demo ledger record is unreadable: {source} {location}")]
    LedgerCorrupted {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },

    #[error("Logger error: {message} {location}")]
    Logger {
        message: String,
        location: ErrorLocation,
    },

    #[error("JSON error: {source} {location}")]
    Json {
        #[source]
        source: serde_json::Error,
        location: ErrorLocation,
    },
}

impl CliError {
    #[track_caller]
    pub fn not_logged_in() -> Self {
        Self::NotLoggedIn {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn vehicle_not_found(model: impl Into<String>) -> Self {
        Self::VehicleNotFound {
            model: model.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn live_network_unavailable() -> Self {
        Self::LiveNetworkUnavailable {
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn ledger_corrupted(source: serde_json::Error) -> Self {
        Self::LedgerCorrupted {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }

    #[track_caller]
    pub fn logger(message: impl Into<String>) -> Self {
        Self::Logger {
            message: message.into(),
            location: ErrorLocation::from(Location::caller()),
        }
    }

    /// Text printed on stderr when a command fails.
    pub fn user_message(&self) -> String {
        match self {
            Self::Session { source, .. } => source.user_message(),
            Self::Contract { source, .. } => source.user_message(),
            Self::Input {
                source: CoreError::InvalidOrderStatus { value, .. },
                ..
            } => format!(
                "Unknown status '{value}'. Use one of: creado, preparando, listo, entregado, cancelado"
            ),
            Self::Input { source, .. } => source.to_string(),
            Self::NotLoggedIn { .. } => "Please log in first.".to_string(),
            Self::VehicleNotFound { model, .. } => {
                format!("No listed vehicle with model '{model}'")
            }
            Self::LiveNetworkUnavailable { .. } => {
                "Live network access is not available; set [network] demo = true".to_string()
            }
            Self::LedgerCorrupted { .. } => {
                "Demo ledger data is unreadable. Delete it to start over.".to_string()
            }
            Self::Config { source, .. } => source.to_string(),
            Self::Logger { message, .. } => message.clone(),
            Self::Json { source, .. } => source.to_string(),
        }
    }
}

impl From<ConfigError> for CliError {
    #[track_caller]
    fn from(source: ConfigError) -> Self {
        Self::Config {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<SessionError> for CliError {
    #[track_caller]
    fn from(source: SessionError) -> Self {
        Self::Session {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<ContractError> for CliError {
    #[track_caller]
    fn from(source: ContractError) -> Self {
        Self::Contract {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<CoreError> for CliError {
    #[track_caller]
    fn from(source: CoreError) -> Self {
        Self::Input {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

impl From<serde_json::Error> for CliError {
    #[track_caller]
    fn from(source: serde_json::Error) -> Self {
        Self::Json {
            source,
            location: ErrorLocation::from(Location::caller()),
        }
    }
}

pub type Result<T> = StdResult<T, CliError>;
