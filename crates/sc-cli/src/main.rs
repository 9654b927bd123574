//! sharecar - ShareCar command-line client
//!
//! # Examples
//!
//! ```bash
//! # Register and keep the printed recovery code
//! sharecar register ana --email ana@example.com
//!
//! # Log in, browse and reserve
//! sharecar login name ana
//! sharecar vehicles list --pretty
//! sharecar reserve "Model 3"
//! ```

use sc_cli::{App, Cli, CliResult, initialize_logger};
use sc_config::Config;

use std::process::ExitCode;

use clap::Parser;
use serde_json::Value;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli.command).await {
        Ok(value) => {
            let output = if cli.pretty {
                serde_json::to_string_pretty(&value)
            } else {
                serde_json::to_string(&value)
            };

            match output {
                Ok(json) => {
                    println!("{json}");
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("Error serializing response: {e}");
                    ExitCode::FAILURE
                }
            }
        }
        Err(e) => {
            log::debug!("{e}");
            eprintln!("Error: {}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

async fn run(command: sc_cli::Commands) -> CliResult<Value> {
    let config = Config::load()?;
    config.validate()?;

    initialize_logger(&config.logging)?;
    config.log_summary();

    App::open(&config)?.execute(command).await
}
