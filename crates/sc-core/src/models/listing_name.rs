//! Vehicle listings are stored on the contract under a single composite name:
//! `BRAND|MODEL|AVAILABILITY|DESCRIPTION`.

pub const LISTING_SEPARATOR: &str = "|";

const DEFAULT_DESCRIPTION: &str = "No description available.";
const LEGACY_BRAND: &str = "General";
const LEGACY_AVAILABILITY: &str = "On request";
const LEGACY_DESCRIPTION: &str = "Generic vehicle";

/// Fields carried by a listing name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingParts {
    pub brand: String,
    pub model: String,
    pub availability: String,
    pub description: String,
}

pub fn encode_listing_name(
    brand: &str,
    model: &str,
    availability: &str,
    description: &str,
) -> String {
    [brand, model, availability, description].join(LISTING_SEPARATOR)
}

/// Decodes a listing name.
///
/// Names with fewer than three segments predate the composite format and
/// decode as a generic vehicle whose model is the whole name. Segments past
/// the third all belong to the description.
pub fn decode_listing_name(raw: &str) -> ListingParts {
    let parts: Vec<&str> = raw.split(LISTING_SEPARATOR).collect();

    if parts.len() >= 3 {
        let description = if parts.len() > 3 {
            parts[3..].join(LISTING_SEPARATOR)
        } else {
            DEFAULT_DESCRIPTION.to_string()
        };

        return ListingParts {
            brand: parts[0].to_string(),
            model: parts[1].to_string(),
            availability: parts[2].to_string(),
            description,
        };
    }

    ListingParts {
        brand: LEGACY_BRAND.to_string(),
        model: raw.to_string(),
        availability: LEGACY_AVAILABILITY.to_string(),
        description: LEGACY_DESCRIPTION.to_string(),
    }
}
