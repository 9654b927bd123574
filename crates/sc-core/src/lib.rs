pub mod error;
pub mod models;

pub use error::{CoreError, Result as CoreResult};
pub use error_location::ErrorLocation;
pub use models::identity::Identity;
pub use models::listing_name::{
    LISTING_SEPARATOR, ListingParts, decode_listing_name, encode_listing_name,
};
pub use models::login_method::LoginMethod;
pub use models::order::Order;
pub use models::order_status::OrderStatus;
pub use models::reservation::Reservation;
pub use models::session::Session;
pub use models::transaction_receipt::TransactionReceipt;
pub use models::vehicle::Vehicle;
pub use models::vehicle_draft::VehicleDraft;

#[cfg(test)]
mod tests;
