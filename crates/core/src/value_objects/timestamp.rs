use std::fmt;

use chrono::{DateTime, SecondsFormat, Utc};
use guardrail_shared_kernel::{GuardError, GuardResult, ParamName};
use serde::{Deserialize, Serialize};

use super::CONVERSION_PARAM;
use crate::ensure;

/// UTC instant between the Unix epoch and the last second of year 9999, both inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[must_use]
#[repr(transparent)]
#[serde(try_from = "DateTime<Utc>", into = "DateTime<Utc>")]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// 9999-12-31T23:59:59Z in seconds since the epoch.
    const MAX_EPOCH_SECONDS: i64 = 253_402_300_799;

    pub fn earliest() -> DateTime<Utc> {
        DateTime::<Utc>::UNIX_EPOCH
    }

    pub fn latest() -> DateTime<Utc> {
        DateTime::<Utc>::from_timestamp(Self::MAX_EPOCH_SECONDS, 0).unwrap_or(DateTime::<Utc>::MAX_UTC)
    }

    pub fn new(value: DateTime<Utc>, param: &str) -> GuardResult<Self> {
        ensure::between(value, Self::earliest(), Self::latest(), param, None).map(Self)
    }

    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Parses RFC 3339 text with any offset and normalizes it to UTC.
    pub fn parse_rfc3339(text: &str, param: &str) -> GuardResult<Self> {
        ParamName::check(param)?;
        let parsed = DateTime::parse_from_rfc3339(text).map_err(|err| {
            GuardError::format(param, format!("Must be an RFC 3339 timestamp: {err}."))
        })?;
        Self::new(parsed.with_timezone(&Utc), param)
    }

    pub fn value(&self) -> &DateTime<Utc> {
        &self.0
    }

    pub fn to_rfc3339(&self) -> String {
        self.0.to_rfc3339_opts(SecondsFormat::AutoSi, true)
    }
}

impl TryFrom<DateTime<Utc>> for Timestamp {
    type Error = GuardError;

    fn try_from(value: DateTime<Utc>) -> GuardResult<Self> {
        Self::new(value, CONVERSION_PARAM)
    }
}

impl From<Timestamp> for DateTime<Utc> {
    fn from(value: Timestamp) -> Self {
        value.0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rfc3339())
    }
}
