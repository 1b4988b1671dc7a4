//! Fuzz target for brand identification.
//!
//! Identification must never panic and must agree with the pattern table.

#![no_main]

use card_identifier::{
    detect::matching_brands, get_card_info, identify_card, sanitize, validate_card, Brand,
};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &str| {
    let brand = identify_card(data);
    let valid = validate_card(data);
    let info = get_card_info(data);

    assert_eq!(info.identified(), brand);
    assert_eq!(info.is_valid(), valid);
    assert_eq!(info.raw_number(), sanitize::sanitize(data));

    match (brand, matching_brands(data).first()) {
        (Some(Brand::Card(found)), Some(&first)) => assert_eq!(found, first),
        (Some(Brand::Card(_)), None) => panic!("brand without a matching pattern"),
        (_, Some(_)) => panic!("matching pattern ignored"),
        _ => {}
    }

    if brand == Some(Brand::Other) {
        assert!((13..=19).contains(&info.raw_number().len()));
    }
});
