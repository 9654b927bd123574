use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_CONTRACT_ID, DEFAULT_NETWORK_DEMO,
    DEFAULT_NETWORK_PASSPHRASE, DEFAULT_RPC_URL,
};

use serde::Deserialize;

/// Contract endpoint settings.
///
/// `rpc_url`, `contract_id` and `network_passphrase` are reserved for a live
/// `ContractClient`. Until one exists they are only validated and logged.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct NetworkConfig {
    pub rpc_url: String,
    pub contract_id: String,
    pub network_passphrase: String,
    /// Run against the local demo ledger instead of the network
    pub demo: bool,
}

impl Default for NetworkConfig {
    fn default() -> Self {
        Self {
            rpc_url: String::from(DEFAULT_RPC_URL),
            contract_id: String::from(DEFAULT_CONTRACT_ID),
            network_passphrase: String::from(DEFAULT_NETWORK_PASSPHRASE),
            demo: DEFAULT_NETWORK_DEMO,
        }
    }
}

impl NetworkConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.rpc_url.starts_with("http://") && !self.rpc_url.starts_with("https://") {
            return Err(ConfigError::network(format!(
                "network.rpc_url must be an http(s) URL, got {:?}",
                self.rpc_url
            )));
        }

        if self.contract_id.trim().is_empty() {
            return Err(ConfigError::network("network.contract_id must not be empty"));
        }

        if self.network_passphrase.trim().is_empty() {
            return Err(ConfigError::network(
                "network.network_passphrase must not be empty",
            ));
        }

        Ok(())
    }
}
