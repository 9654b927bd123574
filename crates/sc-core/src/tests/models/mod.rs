mod identity;
mod listing_name;
mod login_method;
mod order;
mod order_status;
mod vehicle_draft;
