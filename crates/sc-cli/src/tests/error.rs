use crate::CliError;

use sc_contract::ContractError;
use sc_core::{CoreError, OrderStatus};
use sc_session::SessionError;

use std::str::FromStr;

use googletest::prelude::*;

#[test]
fn given_session_not_found_when_user_message_then_register_hint() {
    let error = CliError::from(SessionError::not_found("ghost"));

    assert_that!(
        error.user_message(),
        eq("User not found. Please register first.")
    );
}

#[test]
fn given_declined_contract_call_when_user_message_then_friendly_text() {
    let error = CliError::from(ContractError::user_declined("create_order"));

    assert_that!(error.user_message(), contains_substring("cancelled"));
}

#[test]
fn given_bad_status_when_user_message_then_lists_valid_statuses() {
    let core: CoreError = OrderStatus::from_str("shipped").unwrap_err();

    let error = CliError::from(core);

    assert_that!(error.user_message(), contains_substring("'shipped'"));
    assert_that!(error.user_message(), contains_substring("entregado"));
}

#[test]
fn given_not_logged_in_when_displayed_then_location_included() {
    let error = CliError::not_logged_in();

    assert_that!(error.to_string(), starts_with("No active session"));
    assert_that!(error.user_message(), eq("Please log in first."));
}
