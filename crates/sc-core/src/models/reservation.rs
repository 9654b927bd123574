use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Reservation {
    pub order_id: u32,
    pub model: String,
    pub tx_hash: String,
    pub timestamp: DateTime<Utc>,
}
