use clap::Subcommand;

#[derive(Subcommand)]
pub enum ReservationCommands {
    /// List reservations
    List,
    /// Change a reservation's status
    Status {
        /// Order id
        id: u32,
        /// One of: creado, preparando, listo, entregado, cancelado
        status: String,
    },
}
