use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a submitted contract transaction.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct TransactionReceipt<T> {
    pub hash: String,
    pub timestamp: DateTime<Utc>,
    pub result: T,
}
