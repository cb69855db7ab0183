use guardrail_domain::{Bound, Range};
use guardrail_shared_kernel::ErrorKind;

#[test]
fn range_without_bounds_is_rejected() {
    let err = Range::<i32>::new(None, None).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.param(), "range");
}

#[test]
fn equal_bounds_are_rejected_whatever_the_flags() {
    for (lower_inclusive, upper_inclusive) in [(true, true), (true, false), (false, true), (false, false)] {
        let err = Range::new(
            Some(Bound::new(5, lower_inclusive)),
            Some(Bound::new(5, upper_inclusive)),
        )
        .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
}

#[test]
fn inverted_bounds_are_rejected() {
    assert!(Range::between(10, 1).is_err());
    assert!(Range::new(Some(Bound::exclusive("b")), Some(Bound::exclusive("a"))).is_err());
}

#[test]
fn single_sided_ranges_are_accepted() {
    let lower = Range::lower_only(0, true).unwrap();
    assert_eq!(lower.lower(), Some(&Bound::inclusive(0)));
    assert!(lower.upper().is_none());

    let upper = Range::upper_only(0, false).unwrap();
    assert!(upper.lower().is_none());
    assert_eq!(upper.upper().map(Bound::is_inclusive), Some(false));
}
