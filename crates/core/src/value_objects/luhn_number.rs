use std::fmt;

use guardrail_shared_kernel::{GuardError, GuardResult};
use serde::{Deserialize, Serialize};

use super::CONVERSION_PARAM;
use crate::ensure;

/// Digit string whose last digit is its Luhn check digit (card numbers, IMEIs, ...).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String", into = "String")]
pub struct LuhnNumber(String);

impl LuhnNumber {
    pub fn new(value: &str, param: &str) -> GuardResult<Self> {
        ensure::valid_luhn_checksum(value, param).map(|digits| Self(digits.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Digits without the trailing check digit.
    #[must_use]
    pub fn payload(&self) -> &str {
        &self.0[..self.0.len() - 1]
    }

    #[must_use]
    pub fn check_digit(&self) -> u8 {
        self.0.as_bytes()[self.0.len() - 1] - b'0'
    }
}

impl TryFrom<String> for LuhnNumber {
    type Error = GuardError;

    fn try_from(value: String) -> GuardResult<Self> {
        ensure::valid_luhn_checksum(&value, CONVERSION_PARAM)?;
        Ok(Self(value))
    }
}

impl TryFrom<&str> for LuhnNumber {
    type Error = GuardError;

    fn try_from(value: &str) -> GuardResult<Self> {
        Self::new(value, CONVERSION_PARAM)
    }
}

impl From<LuhnNumber> for String {
    fn from(value: LuhnNumber) -> Self {
        value.0
    }
}

impl AsRef<str> for LuhnNumber {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LuhnNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
