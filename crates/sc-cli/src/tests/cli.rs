use crate::{Cli, Commands, LoginCommands, ReservationCommands, VehicleCommands};

use clap::Parser;
use googletest::prelude::*;

#[test]
fn given_register_with_email_when_parsed_then_fields_captured() {
    let cli = Cli::try_parse_from(["sharecar", "register", "ana", "--email", "a@b.co"]).unwrap();

    match cli.command {
        Commands::Register { name, email } => {
            assert_that!(name, eq("ana"));
            assert_that!(email, some(eq("a@b.co")));
        }
        _ => panic!("expected register"),
    }
    assert_that!(cli.pretty, eq(false));
}

#[test]
fn given_pretty_after_subcommand_when_parsed_then_global_flag_set() {
    let cli = Cli::try_parse_from(["sharecar", "whoami", "--pretty"]).unwrap();

    assert!(matches!(cli.command, Commands::Whoami));
    assert_that!(cli.pretty, eq(true));
}

#[test]
fn given_credentials_login_when_parsed_then_name_and_code() {
    let cli =
        Cli::try_parse_from(["sharecar", "login", "credentials", "ana", "SC-ABC"]).unwrap();

    match cli.command {
        Commands::Login {
            method: LoginCommands::Credentials { name, code },
        } => {
            assert_that!(name, eq("ana"));
            assert_that!(code, eq("SC-ABC"));
        }
        _ => panic!("expected login credentials"),
    }
}

#[test]
fn given_publish_without_description_when_parsed_then_description_none() {
    let cli = Cli::try_parse_from([
        "sharecar",
        "vehicles",
        "publish",
        "--brand",
        "Kia",
        "--model",
        "Rio",
        "--availability",
        "Lun-Vie",
        "--rate",
        "9",
    ])
    .unwrap();

    match cli.command {
        Commands::Vehicles {
            action: VehicleCommands::Publish {
                rate, description, ..
            },
        } => {
            assert_that!(rate, eq(9));
            assert_that!(description, none());
        }
        _ => panic!("expected vehicles publish"),
    }
}

#[test]
fn given_status_with_non_numeric_id_when_parsed_then_error() {
    let result = Cli::try_parse_from(["sharecar", "reservations", "status", "one", "listo"]);

    assert!(result.is_err());
}

#[test]
fn given_status_command_when_parsed_then_id_and_status() {
    let cli = Cli::try_parse_from(["sharecar", "reservations", "status", "3", "listo"]).unwrap();

    assert!(matches!(
        cli.command,
        Commands::Reservations {
            action: ReservationCommands::Status { id: 3, .. }
        }
    ));
}
