use crate::{
    ContractClient, ContractError, DemoLedger, DemoWallet, LedgerState, ListingRecord,
    demo_fleet,
};

use sc_core::OrderStatus;

use googletest::prelude::*;

fn wallet() -> DemoWallet {
    DemoWallet::new("GTESTADDRESS")
}

#[tokio::test]
async fn given_seeded_ledger_when_listing_then_every_demo_vehicle_present() {
    // Given
    let ledger = DemoLedger::seeded();

    // When
    let names = ledger.list_listings().await.unwrap();

    // Then
    assert_that!(names.len(), eq(demo_fleet().len()));
    for draft in demo_fleet() {
        let record = ledger.get_listing(&draft.listing_name()).await.unwrap();
        assert_that!(record, eq(&vec![1, draft.rate]));
    }
}

#[tokio::test]
async fn given_unknown_listing_when_get_listing_then_empty_record() {
    let ledger = DemoLedger::new();

    let record = ledger.get_listing("nope").await.unwrap();

    assert_that!(record, is_empty());
}

#[tokio::test]
async fn given_empty_ledger_when_creating_orders_then_ids_start_at_one() {
    // Given
    let ledger = DemoLedger::seeded();
    let product = demo_fleet()[0].listing_name();

    // When
    let first = ledger
        .create_order(std::slice::from_ref(&product), &wallet())
        .await
        .unwrap();
    let second = ledger
        .create_order(std::slice::from_ref(&product), &wallet())
        .await
        .unwrap();

    // Then
    assert_that!(first.result, eq(1));
    assert_that!(second.result, eq(2));
    assert_that!(first.hash, not(eq(&second.hash)));
    assert_that!(ledger.list_orders().await.unwrap(), eq(&vec![1, 2]));
    assert_that!(
        ledger.get_order(1).await.unwrap(),
        eq(&vec![product, "creado".to_string()])
    );
}

#[tokio::test]
async fn given_order_when_status_updated_then_trailing_status_replaced() {
    // Given
    let ledger = DemoLedger::seeded();
    let product = demo_fleet()[1].listing_name();
    let id = ledger
        .create_order(std::slice::from_ref(&product), &wallet())
        .await
        .unwrap()
        .result;

    // When
    ledger
        .update_order_status(id, OrderStatus::Ready, &wallet())
        .await
        .unwrap();

    // Then
    assert_that!(
        ledger.get_order(id).await.unwrap(),
        eq(&vec![product, "listo".to_string()])
    );
}

#[tokio::test]
async fn given_unknown_order_when_updating_status_then_not_found() {
    let ledger = DemoLedger::new();

    let result = ledger
        .update_order_status(42, OrderStatus::Cancelled, &wallet())
        .await;

    assert!(matches!(result, Err(ContractError::NotFound { .. })));
    assert!(matches!(
        ledger.get_order(42).await,
        Err(ContractError::NotFound { .. })
    ));
}

#[tokio::test]
async fn given_declining_wallet_when_publishing_then_state_unchanged() {
    // Given
    let ledger = DemoLedger::new();
    let wallet = wallet().declining(true);

    // When
    let result = ledger.publish_listing("A|B|C|D", 1, 10, &wallet).await;

    // Then
    assert!(matches!(result, Err(ContractError::UserDeclined { .. })));
    assert_that!(ledger.list_listings().await.unwrap(), is_empty());
    assert_that!(ledger.snapshot().unwrap().tx_count, eq(0));
}

#[tokio::test]
async fn given_negative_rate_when_publishing_then_simulation_fails_before_signing() {
    let ledger = DemoLedger::new();
    let wallet = wallet().declining(true);

    let result = ledger.publish_listing("A|B|C|D", 1, -1, &wallet).await;

    assert!(matches!(result, Err(ContractError::Simulation { .. })));
}

#[tokio::test]
async fn given_unlisted_product_when_creating_order_then_not_found_and_no_id_used() {
    let ledger = DemoLedger::new();

    let result = ledger.create_order(&["ghost".to_string()], &wallet()).await;

    assert!(matches!(result, Err(ContractError::NotFound { .. })));
    assert_that!(ledger.snapshot().unwrap().last_order_id, eq(0));
}

#[tokio::test]
async fn given_snapshot_when_restored_then_ledger_continues_numbering() {
    // Given
    let ledger = DemoLedger::seeded();
    let product = demo_fleet()[2].listing_name();
    ledger
        .create_order(std::slice::from_ref(&product), &wallet())
        .await
        .unwrap();
    let json = serde_json::to_string(&ledger.snapshot().unwrap()).unwrap();

    // When
    let state: LedgerState = serde_json::from_str(&json).unwrap();
    let restored = DemoLedger::from_state(state);
    let next = restored
        .create_order(std::slice::from_ref(&product), &wallet())
        .await
        .unwrap();

    // Then
    assert_that!(next.result, eq(2));
    assert_that!(
        restored.snapshot().unwrap().listings.get(&product),
        some(eq(&ListingRecord {
            quantity: 1,
            rate: 22
        }))
    );
}
