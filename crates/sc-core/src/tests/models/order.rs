use crate::{Order, OrderStatus};

use googletest::prelude::*;

fn fields(values: &[&str]) -> Vec<String> {
    values.iter().map(|v| v.to_string()).collect()
}

#[test]
fn given_trailing_known_status_when_from_record_then_status_split_off() {
    // Given
    let record = fields(&["Toyota|Corolla|Daily|Clean", "listo"]);

    // When
    let order = Order::from_record(7, record);

    // Then
    assert_that!(order.id, eq(7));
    assert_that!(order.status, eq(OrderStatus::Ready));
    assert_that!(order.products, eq(&vec!["Toyota|Corolla|Daily|Clean".to_string()]));
}

#[test]
fn given_no_trailing_status_when_from_record_then_unknown_and_all_products() {
    let order = Order::from_record(1, fields(&["a", "b"]));

    assert_that!(order.status, eq(OrderStatus::Unknown));
    assert_that!(order.products.len(), eq(2));
}

#[test]
fn given_empty_record_when_from_record_then_unknown_without_products() {
    let order = Order::from_record(3, Vec::new());

    assert_that!(order.status, eq(OrderStatus::Unknown));
    assert_that!(order.products, is_empty());
}
