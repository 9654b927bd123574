use crate::OrderStatus;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Order {
    pub id: u32,
    pub products: Vec<String>,
    pub status: OrderStatus,
}

impl Order {
    /// Builds an order from its contract record `[product..., status?]`.
    ///
    /// The last element is taken as the status only when it is a known
    /// status value; otherwise every element is a product.
    pub fn from_record(id: u32, mut fields: Vec<String>) -> Self {
        let status = match fields.last().map(|last| OrderStatus::from_contract(last)) {
            Some(OrderStatus::Unknown) | None => OrderStatus::Unknown,
            Some(status) => {
                fields.pop();
                status
            }
        };

        Self {
            id,
            products: fields,
            status,
        }
    }
}
