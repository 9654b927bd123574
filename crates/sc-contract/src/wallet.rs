use crate::ContractResult;

use async_trait::async_trait;

/// Account access and transaction signing provided by a wallet.
#[async_trait]
pub trait WalletConnector: Send + Sync {
    async fn is_connected(&self) -> ContractResult<bool>;

    /// Public address of the active account.
    async fn address(&self) -> ContractResult<String>;

    /// Signs a transaction envelope and returns the signed envelope.
    async fn sign_transaction(&self, envelope: &str) -> ContractResult<String>;
}
