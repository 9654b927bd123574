use crate::commands::Commands;

use clap::Parser;

#[derive(Parser)]
#[command(name = "sharecar")]
#[command(about = "ShareCar client: local identities and vehicle rentals")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Pretty-print JSON output
    #[arg(long, global = true)]
    pub pretty: bool,
}
