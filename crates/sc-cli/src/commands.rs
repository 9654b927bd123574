use crate::{
    login_commands::LoginCommands, reservation_commands::ReservationCommands,
    vehicle_commands::VehicleCommands,
};

use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Register a new identity and print its recovery code
    Register {
        /// Display name
        name: String,
        /// Contact email
        #[arg(long)]
        email: Option<String>,
    },
    /// Log in
    Login {
        #[command(subcommand)]
        method: LoginCommands,
    },
    /// End the current session
    Logout,
    /// Show the current session
    Whoami,
    /// List registered names
    Users,
    /// Vehicle listings
    Vehicles {
        #[command(subcommand)]
        action: VehicleCommands,
    },
    /// Reserve a listed vehicle by model name
    Reserve {
        /// Vehicle model, as shown by `vehicles list`
        model: String,
    },
    /// Reservations placed on the contract
    Reservations {
        #[command(subcommand)]
        action: ReservationCommands,
    },
    /// Move an unreadable identities file aside so registration works again
    BackupCorrupted,
}
