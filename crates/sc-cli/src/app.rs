use crate::{
    CliError, CliResult, commands::Commands, login_commands::LoginCommands,
    reservation_commands::ReservationCommands, vehicle_commands::VehicleCommands,
};

use sc_config::Config;
use sc_contract::{DemoLedger, DemoWallet, LedgerState, RentalService};
use sc_core::{Order, OrderStatus, VehicleDraft};
use sc_session::{FileStorage, KeyValueStorage, SessionStore, USERS_KEY};

use std::str::FromStr;

use log::{debug, info};
use serde_json::{Value, json};

/// Key of the persisted demo ledger.
pub const LEDGER_KEY: &str = "sharecar_demo_ledger";

/// One CLI invocation's view of the local profile and the rental contract.
///
/// The rental contract is opened per command, so session commands keep
/// working when the ledger record is unreadable or the network is live.
pub struct App {
    storage: FileStorage,
    store: SessionStore<FileStorage>,
    demo: bool,
    wallet_address: String,
}

impl App {
    /// Opens the profile at the configured storage path.
    pub fn open(config: &Config) -> CliResult<Self> {
        let storage = FileStorage::new(config.storage_path()?);
        Ok(Self::with_storage(config, storage))
    }

    pub fn with_storage(config: &Config, storage: FileStorage) -> Self {
        Self {
            store: SessionStore::from_config(storage.clone(), config),
            storage,
            demo: config.network.demo,
            wallet_address: config.wallet.demo_address.clone(),
        }
    }

    pub async fn execute(&self, command: Commands) -> CliResult<Value> {
        match command {
            Commands::Register { name, email } => {
                let registration = self.store.register(&name, email.as_deref())?;
                Ok(serde_json::to_value(registration)?)
            }
            Commands::Login { method } => self.login(method).await,
            Commands::Logout => {
                self.store.logout()?;
                Ok(json!({ "logged_out": true }))
            }
            Commands::Whoami => {
                let session = self.store.current_session()?;
                Ok(json!({
                    "authenticated": session.is_some(),
                    "session": session,
                }))
            }
            Commands::Users => Ok(json!(self.store.registered_names()?)),
            Commands::Vehicles { action } => self.vehicles(action).await,
            Commands::Reserve { model } => self.reserve(&model).await,
            Commands::Reservations { action } => self.reservations(action).await,
            Commands::BackupCorrupted => {
                let backup = self.storage.backup_corrupted(USERS_KEY)?;
                Ok(json!({ "backup": backup }))
            }
        }
    }

    async fn login(&self, method: LoginCommands) -> CliResult<Value> {
        let session = match method {
            LoginCommands::Name { name } => self.store.login_with_name(&name)?,
            LoginCommands::Wallet { name } => {
                let address = self.rentals()?.connect_wallet().await?;
                debug!("Wallet {address} connected for '{name}'");
                self.store.login_with_wallet(&name)?
            }
            LoginCommands::Code { code } => self.store.login_with_recovery_code(&code)?,
            LoginCommands::Credentials { name, code } => {
                self.store.login_with_credentials(&name, &code)?
            }
        };

        Ok(serde_json::to_value(session)?)
    }

    async fn vehicles(&self, action: VehicleCommands) -> CliResult<Value> {
        match action {
            VehicleCommands::List => Ok(json!(self.rentals()?.fetch_vehicles().await?)),
            VehicleCommands::Publish {
                brand,
                model,
                availability,
                rate,
                description,
            } => {
                let draft = VehicleDraft {
                    brand,
                    model,
                    availability,
                    description,
                    rate,
                };
                let rentals = self.rentals()?;
                let receipt = rentals.publish_vehicle(&draft).await?;
                self.save_ledger(&rentals)?;
                Ok(json!({
                    "listing": draft.listing_name(),
                    "tx_hash": receipt.hash,
                    "timestamp": receipt.timestamp,
                }))
            }
        }
    }

    async fn reserve(&self, model: &str) -> CliResult<Value> {
        if !self.store.is_authenticated()? {
            return Err(CliError::not_logged_in());
        }

        let rentals = self.rentals()?;
        let wanted = model.trim();
        let vehicle = rentals
            .fetch_vehicles()
            .await?
            .into_iter()
            .find(|vehicle| vehicle.model.eq_ignore_ascii_case(wanted))
            .ok_or_else(|| CliError::vehicle_not_found(wanted))?;

        let reservation = rentals.reserve(&vehicle).await?;
        self.save_ledger(&rentals)?;
        Ok(serde_json::to_value(reservation)?)
    }

    async fn reservations(&self, action: ReservationCommands) -> CliResult<Value> {
        match action {
            ReservationCommands::List => {
                let orders = self.rentals()?.fetch_orders().await?;
                Ok(Value::Array(orders.iter().map(order_json).collect()))
            }
            ReservationCommands::Status { id, status } => {
                let status = OrderStatus::from_str(status.trim())?;
                let rentals = self.rentals()?;
                let receipt = rentals.update_order_status(id, status).await?;
                self.save_ledger(&rentals)?;
                Ok(json!({
                    "id": id,
                    "status": status,
                    "label": status.label(),
                    "tx_hash": receipt.hash,
                }))
            }
        }
    }

    /// Loads the persisted demo ledger, seeding the demo fleet on first use.
    fn rentals(&self) -> CliResult<RentalService<DemoLedger, DemoWallet>> {
        if !self.demo {
            return Err(CliError::live_network_unavailable());
        }

        let ledger = match self.storage.get(LEDGER_KEY)? {
            Some(json) => {
                let state: LedgerState =
                    serde_json::from_str(&json).map_err(CliError::ledger_corrupted)?;
                DemoLedger::from_state(state)
            }
            None => {
                info!("Seeding demo ledger with the demo fleet");
                DemoLedger::seeded()
            }
        };

        let wallet = DemoWallet::new(self.wallet_address.clone());
        Ok(RentalService::new(ledger, wallet))
    }

    fn save_ledger(&self, rentals: &RentalService<DemoLedger, DemoWallet>) -> CliResult<()> {
        let snapshot = rentals.client().snapshot()?;
        self.storage
            .set(LEDGER_KEY, &serde_json::to_string(&snapshot)?)?;
        Ok(())
    }
}

fn order_json(order: &Order) -> Value {
    json!({
        "id": order.id,
        "products": order.products,
        "status": order.status,
        "label": order.status.label(),
    })
}
