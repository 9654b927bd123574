use crate::{CoreError, Vehicle, VehicleDraft};

use googletest::prelude::*;

fn draft() -> VehicleDraft {
    VehicleDraft {
        brand: " Nissan ".to_string(),
        model: "Urvan".to_string(),
        availability: "Mon-Sun 06:00-22:00".to_string(),
        description: Some("Roomy".to_string()),
        rate: 15,
    }
}

#[test]
fn given_valid_draft_when_validate_then_ok() {
    assert_that!(draft().validate(), ok(anything()));
}

#[test]
fn given_blank_model_when_validate_then_validation_error_on_model() {
    let mut draft = draft();
    draft.model = "   ".to_string();

    let result = draft.validate();

    assert!(matches!(
        result,
        Err(CoreError::Validation { field: "model", .. })
    ));
}

#[test]
fn given_separator_in_brand_when_validate_then_error() {
    let mut draft = draft();
    draft.brand = "A|B".to_string();

    assert_that!(draft.validate(), err(anything()));
}

#[test]
fn given_negative_rate_when_validate_then_error() {
    let mut draft = draft();
    draft.rate = -1;

    assert_that!(draft.validate(), err(anything()));
}

#[test]
fn given_draft_when_listing_name_then_decodes_back_to_same_vehicle() {
    // Given
    let draft = draft();

    // When
    let vehicle = Vehicle::from_listing(&draft.listing_name(), draft.rate);

    // Then
    assert_that!(vehicle.brand, eq("Nissan"));
    assert_that!(vehicle.model, eq("Urvan"));
    assert_that!(vehicle.description, eq("Roomy"));
    assert_that!(vehicle.rate, eq(15));
}
