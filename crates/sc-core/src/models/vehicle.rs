use crate::{decode_listing_name, encode_listing_name};

use serde::{Deserialize, Serialize};

/// A vehicle offered for rent, as decoded from a contract listing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Vehicle {
    pub brand: String,
    pub model: String,
    pub availability: String,
    pub description: String,
    /// Price per rental unit, in the contract's smallest token unit.
    pub rate: i128,
}

impl Vehicle {
    pub fn from_listing(listing_name: &str, rate: i128) -> Self {
        let parts = decode_listing_name(listing_name);
        Self {
            brand: parts.brand,
            model: parts.model,
            availability: parts.availability,
            description: parts.description,
            rate,
        }
    }

    pub fn listing_name(&self) -> String {
        encode_listing_name(
            &self.brand,
            &self.model,
            &self.availability,
            &self.description,
        )
    }
}
