use clap::Subcommand;

#[derive(Subcommand)]
pub enum VehicleCommands {
    /// List vehicles available for rent
    List,
    /// Publish a vehicle
    Publish {
        #[arg(long)]
        brand: String,
        #[arg(long)]
        model: String,
        /// Free-text schedule, e.g. "Lun-Vie 08:00-18:00"
        #[arg(long)]
        availability: String,
        /// Hourly rate
        #[arg(long)]
        rate: i128,
        #[arg(long)]
        description: Option<String>,
    },
}
