use crate::{ContractResult, WalletConnector};

use sc_core::{OrderStatus, TransactionReceipt};

use async_trait::async_trait;

/// Units published per vehicle listing.
pub const LISTING_QUANTITY: u32 = 1;

/// Remote operations of the deployed rental contract.
///
/// Read calls need no signature. Mutating calls are simulated first, then
/// signed through `signer`, then submitted.
#[async_trait]
pub trait ContractClient: Send + Sync {
    /// Names of every listing on the contract.
    async fn list_listings(&self) -> ContractResult<Vec<String>>;

    /// Listing record `[quantity, rate]`; empty when the name is unknown.
    async fn get_listing(&self, name: &str) -> ContractResult<Vec<i128>>;

    async fn publish_listing(
        &self,
        name: &str,
        quantity: u32,
        rate: i128,
        signer: &dyn WalletConnector,
    ) -> ContractResult<TransactionReceipt<()>>;

    /// Creates an order and returns its id.
    async fn create_order(
        &self,
        products: &[String],
        signer: &dyn WalletConnector,
    ) -> ContractResult<TransactionReceipt<u32>>;

    async fn list_orders(&self) -> ContractResult<Vec<u32>>;

    /// Order record `[product..., status?]`.
    async fn get_order(&self, id: u32) -> ContractResult<Vec<String>>;

    async fn update_order_status(
        &self,
        id: u32,
        status: OrderStatus,
        signer: &dyn WalletConnector,
    ) -> ContractResult<TransactionReceipt<()>>;
}
