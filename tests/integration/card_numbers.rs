// tests/integration/card_numbers.rs
use guardrail::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{VALID_CARD_NUMBERS, assert_rejected, corrupted_card_numbers};

#[test]
fn published_test_numbers_pass() {
    for number in VALID_CARD_NUMBERS {
        assert_eq!(ensure::valid_luhn_checksum(number, "card").unwrap(), *number);
        assert!(LuhnNumber::new(number, "card").is_ok());
    }
}

#[test]
fn single_digit_corruption_is_detected() {
    for number in corrupted_card_numbers() {
        assert_rejected(ensure::valid_luhn_checksum(&number, "card"))
            .has_kind(ErrorKind::Format)
            .names_param("card");
    }
}

#[test]
fn generated_check_digit_matches_published_number() {
    for number in VALID_CARD_NUMBERS {
        let payload = &number[..number.len() - 1];
        assert_eq!(luhn::append_check_digit(payload).unwrap(), *number);
    }
}
