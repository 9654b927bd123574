use crate::OrderStatus;

use std::str::FromStr;

#[test]
fn test_order_status_round_trips_contract_values() {
    for status in OrderStatus::SETTABLE {
        assert_eq!(OrderStatus::from_str(status.as_str()).unwrap(), status);
    }
}

#[test]
fn test_order_status_unknown_is_not_settable() {
    assert!(OrderStatus::from_str("desconocido").is_err());
    assert_eq!(OrderStatus::from_contract("shipped"), OrderStatus::Unknown);
}

#[test]
fn test_order_status_labels() {
    assert_eq!(OrderStatus::Created.label(), "Pending");
    assert_eq!(OrderStatus::Delivered.label(), "Finished");
}
