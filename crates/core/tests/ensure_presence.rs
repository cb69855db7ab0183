use guardrail_core::ensure;
use guardrail_shared_kernel::ErrorKind;

#[test]
fn not_null_unwraps_present_values() {
    assert_eq!(ensure::not_null(Some(5), "count").unwrap(), 5);
    let err = ensure::not_null::<u8>(None, "count").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::NullReference);
    assert_eq!(err.param(), "count");
}

#[test]
fn not_null_or_empty_distinguishes_absent_from_empty() {
    assert_eq!(ensure::not_null_or_empty(Some(" "), "name").unwrap(), " ");
    assert_eq!(
        ensure::not_null_or_empty(None, "name").unwrap_err().kind(),
        ErrorKind::NullReference
    );
    assert_eq!(
        ensure::not_null_or_empty(Some(""), "name").unwrap_err().kind(),
        ErrorKind::InvalidArgument
    );
}

#[test]
fn not_null_or_whitespace_rejects_blank_text() {
    assert_eq!(ensure::not_null_or_whitespace(Some(" a "), "name").unwrap(), " a ");
    for blank in ["", "   ", "\t\r\n"] {
        let err = ensure::not_null_or_whitespace(Some(blank), "name").unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    }
    assert_eq!(
        ensure::not_null_or_whitespace(None, "name").unwrap_err().kind(),
        ErrorKind::NullReference
    );
}

#[test]
fn not_empty_checks_slices() {
    assert_eq!(ensure::not_empty(&[1, 2], "ids").unwrap(), &[1, 2]);
    let empty: [u32; 0] = [];
    assert_eq!(ensure::not_empty(&empty, "ids").unwrap_err().kind(), ErrorKind::InvalidArgument);
}

#[test]
fn blank_parameter_names_are_caller_bugs() {
    let err = ensure::not_null(Some(1), "").unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidArgument);
    assert_eq!(err.param(), "param_name");

    let err = ensure::greater_than(1, 0, "  ", None).unwrap_err();
    assert_eq!(err.param(), "param_name");
}
