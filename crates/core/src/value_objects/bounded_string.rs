use std::{fmt, ops::Deref};

use guardrail_shared_kernel::{GuardError, GuardResult, ParamName};
use serde::{Deserialize, Serialize};

use super::CONVERSION_PARAM;
use crate::ensure;

/// String whose length (in chars) was checked against a [`BoundedStringBuilder`].
///
/// `TryFrom<String>` and deserialization use the default builder.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String", into = "String")]
pub struct BoundedString(String);

impl BoundedString {
    pub const fn builder() -> BoundedStringBuilder {
        BoundedStringBuilder::new()
    }

    /// Validates with the default builder settings.
    pub fn new(value: &str, param: &str) -> GuardResult<Self> {
        Self::builder().build(value, param)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }

    #[must_use]
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }
}

/// Length and whitespace policy for [`BoundedString`].
///
/// Defaults: `min_len` 1, `max_len` 255, no trimming, whitespace-only values
/// rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[must_use]
pub struct BoundedStringBuilder {
    min_len: usize,
    max_len: usize,
    trim: bool,
    allow_whitespace_only: bool,
}

impl BoundedStringBuilder {
    pub const DEFAULT_MIN_LEN: usize = 1;
    pub const DEFAULT_MAX_LEN: usize = 255;

    pub const fn new() -> Self {
        Self {
            min_len: Self::DEFAULT_MIN_LEN,
            max_len: Self::DEFAULT_MAX_LEN,
            trim: false,
            allow_whitespace_only: false,
        }
    }

    pub const fn min_len(mut self, min_len: usize) -> Self {
        self.min_len = min_len;
        self
    }

    pub const fn max_len(mut self, max_len: usize) -> Self {
        self.max_len = max_len;
        self
    }

    /// Strip leading and trailing whitespace before measuring.
    pub const fn trim(mut self, trim: bool) -> Self {
        self.trim = trim;
        self
    }

    pub const fn allow_whitespace_only(mut self, allow: bool) -> Self {
        self.allow_whitespace_only = allow;
        self
    }

    pub fn build(&self, value: &str, param: &str) -> GuardResult<BoundedString> {
        ParamName::check(param)?;
        if self.min_len > self.max_len {
            return Err(GuardError::invalid_argument(
                "max_len",
                format!(
                    "Maximum length {} is below minimum length {}.",
                    self.max_len, self.min_len
                ),
            ));
        }

        let text = if self.trim { value.trim() } else { value };
        if !self.allow_whitespace_only && !text.is_empty() && text.trim().is_empty() {
            return Err(GuardError::invalid_argument(
                param,
                "Value must not consist of whitespace only.",
            ));
        }

        let len = text.chars().count();
        let too_short = format!("Length must be at least {}.", self.min_len);
        ensure::greater_than_or_equal_to(len, self.min_len, param, Some(&too_short))?;
        let too_long = format!("Length must be at most {}.", self.max_len);
        ensure::less_than_or_equal_to(len, self.max_len, param, Some(&too_long))?;

        Ok(BoundedString(text.to_string()))
    }
}

impl Default for BoundedStringBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl TryFrom<String> for BoundedString {
    type Error = GuardError;

    fn try_from(value: String) -> GuardResult<Self> {
        Self::new(&value, CONVERSION_PARAM)
    }
}

impl TryFrom<&str> for BoundedString {
    type Error = GuardError;

    fn try_from(value: &str) -> GuardResult<Self> {
        Self::new(value, CONVERSION_PARAM)
    }
}

impl From<BoundedString> for String {
    fn from(value: BoundedString) -> Self {
        value.0
    }
}

impl AsRef<str> for BoundedString {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for BoundedString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl fmt::Display for BoundedString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
