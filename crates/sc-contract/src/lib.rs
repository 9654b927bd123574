//! Rental flows over the ShareCar contract.
//!
//! The contract and the signing wallet are external collaborators, reached
//! through [`ContractClient`] and [`WalletConnector`]. [`RentalService`]
//! turns listings and order records into domain types. The `demo` module
//! provides in-memory stand-ins for both collaborators.

pub mod contract_client;
pub mod demo;
pub mod error;
pub mod rental_service;
pub mod wallet;

pub use contract_client::{ContractClient, LISTING_QUANTITY};
pub use demo::fleet::demo_fleet;
pub use demo::ledger::{DemoLedger, LedgerState, ListingRecord};
pub use demo::wallet::DemoWallet;
pub use error::{ContractError, Result as ContractResult, friendly_message};
pub use rental_service::RentalService;
pub use wallet::WalletConnector;

#[cfg(test)]
mod tests;
