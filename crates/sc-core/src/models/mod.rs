pub mod identity;
pub mod listing_name;
pub mod login_method;
pub mod order;
pub mod order_status;
pub mod reservation;
pub mod session;
pub mod transaction_receipt;
pub mod vehicle;
pub mod vehicle_draft;
