use crate::{CoreError, CoreResult, LISTING_SEPARATOR, encode_listing_name};

use serde::{Deserialize, Serialize};

/// Input for publishing a new vehicle.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct VehicleDraft {
    pub brand: String,
    pub model: String,
    pub availability: String,
    pub description: Option<String>,
    pub rate: i128,
}

impl VehicleDraft {
    #[track_caller]
    pub fn validate(&self) -> CoreResult<()> {
        for (field, value) in [
            ("brand", &self.brand),
            ("model", &self.model),
            ("availability", &self.availability),
        ] {
            if value.trim().is_empty() {
                return Err(CoreError::validation(field, "must not be empty"));
            }
            if value.contains(LISTING_SEPARATOR) {
                return Err(CoreError::validation(
                    field,
                    format!("must not contain '{LISTING_SEPARATOR}'"),
                ));
            }
        }

        if self.rate < 0 {
            return Err(CoreError::validation("rate", "must not be negative"));
        }

        Ok(())
    }

    pub fn listing_name(&self) -> String {
        encode_listing_name(
            self.brand.trim(),
            self.model.trim(),
            self.availability.trim(),
            self.description.as_deref().map(str::trim).unwrap_or_default(),
        )
    }
}
