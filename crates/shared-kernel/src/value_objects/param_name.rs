// crates/shared-kernel/src/value_objects/param_name.rs
use std::{borrow::Borrow, fmt, ops::Deref};

use serde::{Deserialize, Serialize};

use crate::error::{GuardError, GuardResult};

/// Name of the argument a guard reports against. Never empty or whitespace only.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(transparent)]
#[serde(try_from = "String", into = "String")]
pub struct ParamName(String);

impl ParamName {
    /// Parameter name used when a guard is handed a blank name.
    pub const SELF_NAME: &'static str = "param_name";

    pub fn new(name: &str) -> GuardResult<Self> {
        Self::check(name).map(|name| Self(name.to_string()))
    }

    /// Validates a borrowed name without allocating.
    pub fn check(name: &str) -> GuardResult<&str> {
        if name.trim().is_empty() {
            return Err(GuardError::invalid_argument(
                Self::SELF_NAME,
                "Parameter name must not be empty or whitespace.",
            ));
        }
        Ok(name)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    #[must_use]
    pub fn into_string(self) -> String {
        self.0
    }
}

impl TryFrom<String> for ParamName {
    type Error = GuardError;

    fn try_from(name: String) -> GuardResult<Self> {
        Self::check(&name)?;
        Ok(Self(name))
    }
}

impl TryFrom<&str> for ParamName {
    type Error = GuardError;

    fn try_from(name: &str) -> GuardResult<Self> {
        Self::new(name)
    }
}

impl From<ParamName> for String {
    fn from(name: ParamName) -> Self {
        name.0
    }
}

impl AsRef<str> for ParamName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Deref for ParamName {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl Borrow<str> for ParamName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ParamName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
