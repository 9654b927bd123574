#![allow(dead_code)]

use sc_contract::{ContractClient, ContractError, ContractResult, WalletConnector};
use sc_core::{OrderStatus, TransactionReceipt};

use std::collections::BTreeMap;

use async_trait::async_trait;
use chrono::Utc;

pub const ADDRESS: &str = "GDEMO7SHARECAR2WALLET3ADDRESS4TESTNET5ACCOUNT6XLM7AAAAAA";

/// Read-only contract returning fixed raw records.
#[derive(Default)]
pub struct FixedContract {
    pub listings: Vec<(String, Vec<i128>)>,
    pub orders: BTreeMap<u32, Vec<String>>,
}

impl FixedContract {
    pub fn with_listing(mut self, name: &str, record: &[i128]) -> Self {
        self.listings.push((name.to_string(), record.to_vec()));
        self
    }

    pub fn with_order(mut self, id: u32, record: &[&str]) -> Self {
        self.orders
            .insert(id, record.iter().map(|field| field.to_string()).collect());
        self
    }
}

#[async_trait]
impl ContractClient for FixedContract {
    async fn list_listings(&self) -> ContractResult<Vec<String>> {
        Ok(self.listings.iter().map(|(name, _)| name.clone()).collect())
    }

    async fn get_listing(&self, name: &str) -> ContractResult<Vec<i128>> {
        Ok(self
            .listings
            .iter()
            .find(|(listed, _)| listed == name)
            .map(|(_, record)| record.clone())
            .unwrap_or_default())
    }

    async fn publish_listing(
        &self,
        _name: &str,
        _quantity: u32,
        _rate: i128,
        _signer: &dyn WalletConnector,
    ) -> ContractResult<TransactionReceipt<()>> {
        Err(ContractError::provider("read-only contract"))
    }

    async fn create_order(
        &self,
        _products: &[String],
        _signer: &dyn WalletConnector,
    ) -> ContractResult<TransactionReceipt<u32>> {
        Ok(TransactionReceipt {
            hash: "tx_fixed".to_string(),
            timestamp: Utc::now(),
            result: 7,
        })
    }

    async fn list_orders(&self) -> ContractResult<Vec<u32>> {
        Ok(self.orders.keys().copied().collect())
    }

    async fn get_order(&self, id: u32) -> ContractResult<Vec<String>> {
        self.orders
            .get(&id)
            .cloned()
            .ok_or_else(|| ContractError::not_found(format!("Order {id}")))
    }

    async fn update_order_status(
        &self,
        _id: u32,
        _status: OrderStatus,
        _signer: &dyn WalletConnector,
    ) -> ContractResult<TransactionReceipt<()>> {
        Err(ContractError::network("Failed to fetch"))
    }
}
