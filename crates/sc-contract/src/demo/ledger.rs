use crate::{ContractClient, ContractError, ContractResult, WalletConnector, demo_fleet};

use sc_core::{OrderStatus, TransactionReceipt};

use std::collections::BTreeMap;
use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use chrono::Utc;
use log::{debug, info};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct ListingRecord {
    pub quantity: u32,
    pub rate: i128,
}

/// Everything the demo contract stores.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct LedgerState {
    #[serde(default)]
    pub listings: BTreeMap<String, ListingRecord>,
    #[serde(default)]
    pub orders: BTreeMap<u32, Vec<String>>,
    /// Id of the most recently created order.
    #[serde(default)]
    pub last_order_id: u32,
    /// Transactions submitted so far.
    #[serde(default)]
    pub tx_count: u64,
}

/// In-memory contract with the deployed contract's semantics.
///
/// Mutations run against a copy of the state first (simulation), are then
/// signed by the caller's wallet, and only then applied.
#[derive(Debug, Default)]
pub struct DemoLedger {
    state: Mutex<LedgerState>,
}

impl DemoLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_state(state: LedgerState) -> Self {
        Self {
            state: Mutex::new(state),
        }
    }

    /// Ledger pre-populated with the demo fleet.
    pub fn seeded() -> Self {
        let mut state = LedgerState::default();
        for draft in demo_fleet() {
            state.listings.insert(
                draft.listing_name(),
                ListingRecord {
                    quantity: crate::LISTING_QUANTITY,
                    rate: draft.rate,
                },
            );
        }
        Self::from_state(state)
    }

    /// Copy of the current state, for persisting between runs.
    pub fn snapshot(&self) -> ContractResult<LedgerState> {
        Ok(self.lock()?.clone())
    }

    fn lock(&self) -> ContractResult<MutexGuard<'_, LedgerState>> {
        self.state
            .lock()
            .map_err(|_| ContractError::provider("demo ledger state is unavailable"))
    }

    /// Simulate, sign, then apply `apply` to the ledger state.
    async fn submit<T, F>(
        &self,
        envelope: String,
        signer: &dyn WalletConnector,
        apply: F,
    ) -> ContractResult<TransactionReceipt<T>>
    where
        F: Fn(&mut LedgerState) -> ContractResult<T> + Send,
        T: Send,
    {
        {
            let mut simulated = self.lock()?.clone();
            apply(&mut simulated)?;
        }
        debug!("Simulated {envelope}");

        if !signer.is_connected().await? {
            return Err(ContractError::wallet_not_connected());
        }
        let signed = signer.sign_transaction(&envelope).await?;

        let mut state = self.lock()?;
        let result = apply(&mut state)?;
        state.tx_count += 1;
        let hash = format!("tx_{:016x}", state.tx_count);

        info!("Submitted {signed} as {hash}");
        Ok(TransactionReceipt {
            hash,
            timestamp: Utc::now(),
            result,
        })
    }
}

#[async_trait]
impl ContractClient for DemoLedger {
    async fn list_listings(&self) -> ContractResult<Vec<String>> {
        Ok(self.lock()?.listings.keys().cloned().collect())
    }

    async fn get_listing(&self, name: &str) -> ContractResult<Vec<i128>> {
        Ok(self
            .lock()?
            .listings
            .get(name)
            .map(|record| vec![i128::from(record.quantity), record.rate])
            .unwrap_or_default())
    }

    async fn publish_listing(
        &self,
        name: &str,
        quantity: u32,
        rate: i128,
        signer: &dyn WalletConnector,
    ) -> ContractResult<TransactionReceipt<()>> {
        let envelope = format!("publish_listing({name}, {quantity}, {rate})");

        self.submit(envelope, signer, |state| {
            if name.trim().is_empty() {
                return Err(ContractError::simulation("publish_listing", "name is empty"));
            }
            if rate < 0 {
                return Err(ContractError::simulation("publish_listing", "rate is negative"));
            }
            state
                .listings
                .insert(name.to_string(), ListingRecord { quantity, rate });
            Ok(())
        })
        .await
    }

    async fn create_order(
        &self,
        products: &[String],
        signer: &dyn WalletConnector,
    ) -> ContractResult<TransactionReceipt<u32>> {
        let envelope = format!("create_order({})", products.join(", "));

        self.submit(envelope, signer, |state| {
            if products.is_empty() {
                return Err(ContractError::simulation("create_order", "no products"));
            }
            if let Some(missing) = products
                .iter()
                .find(|product| !state.listings.contains_key(product.as_str()))
            {
                return Err(ContractError::not_found(format!("Listing '{missing}'")));
            }

            state.last_order_id += 1;
            let id = state.last_order_id;
            let mut record = products.to_vec();
            record.push(OrderStatus::Created.as_str().to_string());
            state.orders.insert(id, record);
            Ok(id)
        })
        .await
    }

    async fn list_orders(&self) -> ContractResult<Vec<u32>> {
        Ok(self.lock()?.orders.keys().copied().collect())
    }

    async fn get_order(&self, id: u32) -> ContractResult<Vec<String>> {
        self.lock()?
            .orders
            .get(&id)
            .cloned()
            .ok_or_else(|| ContractError::not_found(format!("Order {id}")))
    }

    async fn update_order_status(
        &self,
        id: u32,
        status: OrderStatus,
        signer: &dyn WalletConnector,
    ) -> ContractResult<TransactionReceipt<()>> {
        let envelope = format!("update_order_status({id}, {status})");

        self.submit(envelope, signer, |state| {
            let record = state
                .orders
                .get_mut(&id)
                .ok_or_else(|| ContractError::not_found(format!("Order {id}")))?;

            let has_status = record
                .last()
                .is_some_and(|last| OrderStatus::from_contract(last) != OrderStatus::Unknown);
            if has_status {
                record.pop();
            }
            record.push(status.as_str().to_string());
            Ok(())
        })
        .await
    }
}
