use crate::{ContractError, ContractResult, WalletConnector};

use async_trait::async_trait;
use log::debug;

/// Wallet stand-in with a fixed address.
///
/// Can be switched to disconnected, or to refuse every signature the way a
/// user dismissing the wallet prompt would.
#[derive(Debug, Clone)]
pub struct DemoWallet {
    address: String,
    connected: bool,
    declining: bool,
}

impl DemoWallet {
    pub fn new(address: impl Into<String>) -> Self {
        Self {
            address: address.into(),
            connected: true,
            declining: false,
        }
    }

    pub fn connected(mut self, connected: bool) -> Self {
        self.connected = connected;
        self
    }

    pub fn declining(mut self, declining: bool) -> Self {
        self.declining = declining;
        self
    }
}

#[async_trait]
impl WalletConnector for DemoWallet {
    async fn is_connected(&self) -> ContractResult<bool> {
        Ok(self.connected)
    }

    async fn address(&self) -> ContractResult<String> {
        if !self.connected {
            return Err(ContractError::wallet_not_connected());
        }
        Ok(self.address.clone())
    }

    async fn sign_transaction(&self, envelope: &str) -> ContractResult<String> {
        if !self.connected {
            return Err(ContractError::wallet_not_connected());
        }
        if self.declining {
            let method = envelope.split_once('(').map_or(envelope, |(method, _)| method);
            return Err(ContractError::user_declined(method));
        }

        debug!("Demo wallet signed {envelope}");
        Ok(format!("{envelope};signed={}", self.address))
    }
}
