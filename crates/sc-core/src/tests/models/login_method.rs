use crate::LoginMethod;

use std::str::FromStr;

#[test]
fn test_login_method_as_str() {
    assert_eq!(LoginMethod::Name.as_str(), "name");
    assert_eq!(LoginMethod::Wallet.as_str(), "wallet");
    assert_eq!(LoginMethod::Recovery.as_str(), "recovery");
}

#[test]
fn test_login_method_from_str() {
    assert_eq!(LoginMethod::from_str("wallet").unwrap(), LoginMethod::Wallet);
    assert!(LoginMethod::from_str("freighter").is_err());
}

#[test]
fn test_login_method_serializes_as_tag() {
    let json = serde_json::to_string(&LoginMethod::Recovery).unwrap();
    assert_eq!(json, "\"recovery\"");
}
