// tests/integration/documented_scenarios.rs
use guardrail::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::assert_rejected;

#[test]
fn check_digit_of_classic_number() {
    assert_eq!(luhn::check_digit(&[7, 9, 9, 2, 7, 3, 9, 8, 7, 1]).unwrap(), 3);
    assert!(luhn::is_valid_str("79927398713").unwrap());
}

#[test]
fn four_digit_sequence_is_checked_against_its_prefix() {
    let expected = luhn::check_digit(&[1, 2, 0]).unwrap();
    assert_eq!(luhn::is_valid(&[1, 2, 0, 1]).unwrap(), expected == 1);
    assert_eq!(luhn::is_valid_str("1201").unwrap(), expected == 1);
}

#[test]
fn degenerate_range_is_rejected() {
    assert_rejected(Range::new(Some(Bound::inclusive(5)), Some(Bound::inclusive(5))))
        .has_kind(ErrorKind::InvalidArgument);
    assert_rejected(Range::new(Some(Bound::exclusive(5)), Some(Bound::inclusive(5))))
        .has_kind(ErrorKind::InvalidArgument);
}

#[test]
fn value_below_inclusive_zero_names_parameter_and_value() {
    let range = Range::lower_only(0, true).unwrap();
    assert_rejected(range.is_within(-1, "x", None))
        .has_kind(ErrorKind::OutOfRange)
        .names_param("x")
        .has_actual("-1");
}

#[test]
fn non_digit_input_is_a_format_error() {
    assert_rejected(luhn::is_valid_str("1a01")).has_kind(ErrorKind::Format);
}

#[test]
fn short_inputs_are_invalid_arguments() {
    assert_rejected(luhn::is_valid(&[4])).has_kind(ErrorKind::InvalidArgument);
    assert_rejected(luhn::check_digit(&[])).has_kind(ErrorKind::InvalidArgument);
}
