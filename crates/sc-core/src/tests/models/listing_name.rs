use crate::{decode_listing_name, encode_listing_name};

use googletest::prelude::*;

#[test]
fn test_encode_listing_name() {
    let name = encode_listing_name("Toyota", "Corolla 2018", "Mon-Sun 08:00-20:00", "Reliable");
    assert_eq!(name, "Toyota|Corolla 2018|Mon-Sun 08:00-20:00|Reliable");
}

#[test]
fn given_four_segments_when_decode_then_all_fields_populated() {
    let parts = decode_listing_name("Tesla|Model 3|Tue-Sat|Electric");

    assert_that!(parts.brand, eq("Tesla"));
    assert_that!(parts.model, eq("Model 3"));
    assert_that!(parts.availability, eq("Tue-Sat"));
    assert_that!(parts.description, eq("Electric"));
}

#[test]
fn given_three_segments_when_decode_then_description_defaults() {
    let parts = decode_listing_name("BMW|X3 2020|Mon-Fri");

    assert_that!(parts.model, eq("X3 2020"));
    assert_that!(parts.description, eq("No description available."));
}

#[test]
fn given_separator_inside_description_when_decode_then_description_keeps_it() {
    let parts = decode_listing_name("Ford|Mustang GT|Weekends|V8|manual");

    assert_that!(parts.description, eq("V8|manual"));
}

#[test]
fn given_legacy_name_when_decode_then_generic_vehicle() {
    let parts = decode_listing_name("Hamburguesa");

    assert_that!(parts.brand, eq("General"));
    assert_that!(parts.model, eq("Hamburguesa"));
}
