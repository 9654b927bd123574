use crate::{ContractError, DemoWallet, WalletConnector};

use googletest::prelude::*;

const ADDRESS: &str = "GTESTADDRESS";

#[tokio::test]
async fn given_connected_wallet_when_signing_then_envelope_marked_signed() {
    let wallet = DemoWallet::new(ADDRESS);

    let signed = wallet.sign_transaction("create_order(x)").await.unwrap();

    assert_that!(signed, starts_with("create_order(x)"));
    assert_that!(signed, contains_substring(ADDRESS));
}

#[tokio::test]
async fn given_declining_wallet_when_signing_then_user_declined_with_method() {
    let wallet = DemoWallet::new(ADDRESS).declining(true);

    let result = wallet.sign_transaction("update_order_status(1, listo)").await;

    match result {
        Err(ContractError::UserDeclined { method, .. }) => {
            assert_that!(method, eq("update_order_status"));
        }
        other => panic!("expected UserDeclined, got {other:?}"),
    }
}

#[tokio::test]
async fn given_disconnected_wallet_when_address_then_not_connected() {
    let wallet = DemoWallet::new(ADDRESS).connected(false);

    assert_that!(wallet.is_connected().await.unwrap(), eq(false));
    assert!(matches!(
        wallet.address().await,
        Err(ContractError::WalletNotConnected { .. })
    ));
}
