//! sharecar CLI library
//!
//! Exposes the command tree and [`App`] for the binary and for tests.

pub(crate) mod app;
pub(crate) mod cli;
pub(crate) mod commands;
pub(crate) mod error;
pub(crate) mod logger;
pub(crate) mod login_commands;
pub(crate) mod reservation_commands;
pub(crate) mod vehicle_commands;

#[cfg(test)]
mod tests;

pub use app::{App, LEDGER_KEY};
pub use cli::Cli;
pub use commands::Commands;
pub use error::{CliError, Result as CliResult};
pub use logger::initialize as initialize_logger;
pub use login_commands::LoginCommands;
pub use reservation_commands::ReservationCommands;
pub use vehicle_commands::VehicleCommands;
