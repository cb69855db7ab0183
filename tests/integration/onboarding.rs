// tests/integration/onboarding.rs
use chrono::{TimeZone, Utc};
use guardrail::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::assert_rejected;

#[derive(Debug)]
struct Customer {
    name: BoundedString,
    age: PositiveInt,
    signed_up: Timestamp,
}

impl Customer {
    fn new(name: Option<&str>, age: i64, signed_up: &str) -> GuardResult<Self> {
        let name = ensure::not_null_or_whitespace(name, "name")?;
        let name = BoundedString::builder().max_len(40).trim(true).build(name, "name")?;
        let age = ensure::between(age, 18, 130, "age", Some("Customers must be adults."))?;
        Ok(Self {
            name,
            age: PositiveInt::new(age, "age")?,
            signed_up: Timestamp::parse_rfc3339(signed_up, "signed_up")?,
        })
    }
}

#[test]
fn valid_customer_is_built() {
    let customer = Customer::new(Some("  Grace Hopper "), 42, "2024-05-01T08:00:00Z").unwrap();
    assert_eq!(customer.name.as_str(), "Grace Hopper");
    assert_eq!(customer.age, 42);
    assert_eq!(*customer.signed_up.value(), Utc.with_ymd_and_hms(2024, 5, 1, 8, 0, 0).unwrap());
}

#[test]
fn each_field_fails_fast_with_its_own_name() {
    assert_rejected(Customer::new(None, 42, "2024-05-01T08:00:00Z"))
        .has_kind(ErrorKind::NullReference)
        .names_param("name");
    assert_rejected(Customer::new(Some("Ada"), 12, "2024-05-01T08:00:00Z"))
        .has_kind(ErrorKind::OutOfRange)
        .names_param("age")
        .has_actual("12")
        .has_message("Customers must be adults.");
    assert_rejected(Customer::new(Some("Ada"), 30, "soon"))
        .has_kind(ErrorKind::Format)
        .names_param("signed_up");
}

#[test]
fn context_wraps_nested_failures() {
    let err = Customer::new(Some("Ada"), 300, "2024-05-01T08:00:00Z")
        .context("importing row 7")
        .unwrap_err();
    assert!(err.to_string().starts_with("importing row 7: "));
    assert_eq!(err.kind(), ErrorKind::OutOfRange);
    assert_eq!(err.param(), "age");
}
