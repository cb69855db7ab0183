//! Assertion helpers.

use guardrail::{ErrorKind, GuardError, GuardResult};

/// Fluent assertions over a failed guard.
pub struct GuardErrorAssertion {
    err: GuardError,
}

#[allow(dead_code)]
impl GuardErrorAssertion {
    pub fn new<T: std::fmt::Debug>(result: GuardResult<T>) -> Self {
        match result {
            Ok(value) => panic!("Expected a guard failure, got Ok({value:?})"),
            Err(err) => Self { err },
        }
    }

    pub fn has_kind(self, expected: ErrorKind) -> Self {
        assert_eq!(self.err.kind(), expected, "Expected {expected} error, got {}", self.err);
        self
    }

    pub fn names_param(self, expected: &str) -> Self {
        assert_eq!(self.err.param(), expected, "Expected parameter '{expected}', got {}", self.err);
        self
    }

    pub fn has_actual(self, expected: &str) -> Self {
        assert_eq!(self.err.actual(), Some(expected), "Unexpected actual value in {}", self.err);
        self
    }

    pub fn has_message(self, expected: &str) -> Self {
        assert_eq!(self.err.message(), expected);
        self
    }
}

/// Shorthand for [`GuardErrorAssertion::new`].
pub fn assert_rejected<T: std::fmt::Debug>(result: GuardResult<T>) -> GuardErrorAssertion {
    GuardErrorAssertion::new(result)
}
