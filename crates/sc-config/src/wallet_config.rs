use crate::{ConfigError, ConfigErrorResult, DEFAULT_WALLET_ADDRESS};

use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct WalletConfig {
    /// Account used by the demo wallet
    pub demo_address: String,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            demo_address: String::from(DEFAULT_WALLET_ADDRESS),
        }
    }
}

impl WalletConfig {
    pub fn validate(&self) -> ConfigErrorResult<()> {
        if !self.demo_address.starts_with('G') || self.demo_address.len() != 56 {
            return Err(ConfigError::wallet(
                "wallet.demo_address must be a 56-character account id starting with 'G'",
            ));
        }

        Ok(())
    }
}
