use crate::{ContractClient, ContractError, ContractResult, LISTING_QUANTITY, WalletConnector};

use sc_core::{
    CoreError, LISTING_SEPARATOR, Order, OrderStatus, Reservation, TransactionReceipt, Vehicle,
    VehicleDraft,
};

use log::{debug, info, warn};

/// Browsing, publishing and reserving vehicles on behalf of one wallet.
pub struct RentalService<C, W> {
    client: C,
    wallet: W,
}

impl<C: ContractClient, W: WalletConnector> RentalService<C, W> {
    pub fn new(client: C, wallet: W) -> Self {
        Self { client, wallet }
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn wallet(&self) -> &W {
        &self.wallet
    }

    /// Checks the wallet is reachable and returns its address.
    ///
    /// Run before a wallet-assisted login.
    pub async fn connect_wallet(&self) -> ContractResult<String> {
        if !self.wallet.is_connected().await? {
            return Err(ContractError::wallet_not_connected());
        }

        let address = self.wallet.address().await?;
        let address = address.trim();
        if address.is_empty() {
            return Err(ContractError::wallet_address("wallet returned an empty address"));
        }

        info!("Wallet connected: {address}");
        Ok(address.to_string())
    }

    /// Every vehicle listed on the contract.
    ///
    /// Names without the listing separator belong to other products and are
    /// skipped, as are records too short to carry a rate.
    pub async fn fetch_vehicles(&self) -> ContractResult<Vec<Vehicle>> {
        let names = self.client.list_listings().await?;
        let mut vehicles = Vec::with_capacity(names.len());

        for name in names {
            if !name.contains(LISTING_SEPARATOR) {
                debug!("Skipping non-vehicle listing '{name}'");
                continue;
            }

            let record = self.client.get_listing(&name).await?;
            let Some(&rate) = record.get(1) else {
                warn!("Skipping listing '{name}' with incomplete record");
                continue;
            };

            vehicles.push(Vehicle::from_listing(&name, rate));
        }

        debug!("Fetched {} vehicles", vehicles.len());
        Ok(vehicles)
    }

    /// Publishes a single unit of `draft` at its hourly rate.
    pub async fn publish_vehicle(
        &self,
        draft: &VehicleDraft,
    ) -> ContractResult<TransactionReceipt<()>> {
        draft.validate()?;
        let name = draft.listing_name();

        let receipt = self
            .client
            .publish_listing(&name, LISTING_QUANTITY, draft.rate, &self.wallet)
            .await?;

        info!("Published vehicle '{name}' in {}", receipt.hash);
        Ok(receipt)
    }

    /// Places an order for `vehicle`.
    pub async fn reserve(&self, vehicle: &Vehicle) -> ContractResult<Reservation> {
        let products = vec![vehicle.listing_name()];
        let receipt = self.client.create_order(&products, &self.wallet).await?;

        info!(
            "Reserved '{}' as order {} in {}",
            vehicle.model, receipt.result, receipt.hash
        );

        Ok(Reservation {
            order_id: receipt.result,
            model: vehicle.model.clone(),
            tx_hash: receipt.hash,
            timestamp: receipt.timestamp,
        })
    }

    /// Every order on the contract, in the order the contract lists them.
    pub async fn fetch_orders(&self) -> ContractResult<Vec<Order>> {
        let ids = self.client.list_orders().await?;
        let mut orders = Vec::with_capacity(ids.len());

        for id in ids {
            let record = self.client.get_order(id).await?;
            orders.push(Order::from_record(id, record));
        }

        debug!("Fetched {} orders", orders.len());
        Ok(orders)
    }

    pub async fn update_order_status(
        &self,
        id: u32,
        status: OrderStatus,
    ) -> ContractResult<TransactionReceipt<()>> {
        if status == OrderStatus::Unknown {
            return Err(CoreError::invalid_order_status(status.as_str()).into());
        }

        let receipt = self
            .client
            .update_order_status(id, status, &self.wallet)
            .await?;

        info!("Order {id} moved to {status} in {}", receipt.hash);
        Ok(receipt)
    }
}
