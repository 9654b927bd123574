use crate::Identity;

use googletest::prelude::*;

#[test]
fn given_mixed_case_name_when_has_name_then_matches_case_insensitively() {
    // Given
    let identity = Identity::new("Ana".to_string(), None, "SC-ABC".to_string());

    // When / Then
    assert_that!(identity.has_name("ana"), eq(true));
    assert_that!(identity.has_name("ANA"), eq(true));
    assert_that!(identity.has_name("anabel"), eq(false));
}

#[test]
fn given_no_email_when_has_email_then_false() {
    let identity = Identity::new("bob".to_string(), None, "SC-1".to_string());

    assert_that!(identity.has_email("bob@example.com"), eq(false));
}

#[test]
fn given_email_when_has_email_with_other_case_then_true() {
    let identity = Identity::new(
        "bob".to_string(),
        Some("Bob@Example.com".to_string()),
        "SC-1".to_string(),
    );

    assert_that!(identity.has_email("bob@example.COM"), eq(true));
}

#[test]
fn given_identity_without_email_when_serialized_then_email_key_is_omitted() {
    // Given
    let identity = Identity::new("carla".to_string(), None, "SC-XYZ".to_string());

    // When
    let json = serde_json::to_string(&identity).unwrap();

    // Then
    assert_that!(json, not(contains_substring("email")));
    assert_that!(json, contains_substring("\"recovery_code\":\"SC-XYZ\""));
}
