use std::fmt;

use guardrail_shared_kernel::{GuardError, GuardResult};
use serde::{Deserialize, Serialize};

use super::CONVERSION_PARAM;
use crate::ensure;

/// Canonical padded Base64 text. The payload itself is never decoded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String", into = "String")]
pub struct Base64String(String);

impl Base64String {
    pub fn new(value: &str, param: &str) -> GuardResult<Self> {
        ensure::valid_base64(value, param).map(|text| Self(text.to_string()))
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Number of bytes the text decodes to.
    #[must_use]
    pub fn decoded_len(&self) -> usize {
        let padding = self.0.bytes().rev().take_while(|&b| b == b'=').count();
        self.0.len() / 4 * 3 - padding
    }
}

impl TryFrom<String> for Base64String {
    type Error = GuardError;

    fn try_from(value: String) -> GuardResult<Self> {
        ensure::valid_base64(&value, CONVERSION_PARAM)?;
        Ok(Self(value))
    }
}

impl From<Base64String> for String {
    fn from(value: Base64String) -> Self {
        value.0
    }
}

impl AsRef<str> for Base64String {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Base64String {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
