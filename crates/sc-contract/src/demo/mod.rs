//! In-memory collaborators for running without a network.

pub mod fleet;
pub mod ledger;
pub mod wallet;
