use std::fmt;

use guardrail_shared_kernel::{GuardError, GuardResult};
use serde::{Deserialize, Serialize};

use super::CONVERSION_PARAM;
use crate::ensure;

macro_rules! signed_primitive {
    ($(#[$meta:meta])* $name:ident, $guard:path) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        #[repr(transparent)]
        #[serde(try_from = "i64", into = "i64")]
        pub struct $name(i64);

        impl $name {
            pub fn new(value: i64, param: &str) -> GuardResult<Self> {
                $guard(value, 0, param, None).map(Self)
            }

            #[inline]
            pub const fn value(self) -> i64 {
                self.0
            }
        }

        impl TryFrom<i64> for $name {
            type Error = GuardError;

            fn try_from(value: i64) -> GuardResult<Self> {
                Self::new(value, CONVERSION_PARAM)
            }
        }

        impl From<$name> for i64 {
            fn from(value: $name) -> Self {
                value.0
            }
        }

        impl PartialEq<i64> for $name {
            fn eq(&self, other: &i64) -> bool {
                self.0 == *other
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                write!(f, "{}", self.0)
            }
        }
    };
}

signed_primitive!(
    /// Strictly positive integer.
    PositiveInt,
    ensure::greater_than
);

signed_primitive!(
    /// Zero or a positive integer.
    NonNegativeInt,
    ensure::greater_than_or_equal_to
);

signed_primitive!(
    /// Strictly negative integer.
    NegativeInt,
    ensure::less_than
);

impl PositiveInt {
    pub const ONE: Self = Self(1);
}

impl NonNegativeInt {
    pub const ZERO: Self = Self(0);
}

impl From<PositiveInt> for NonNegativeInt {
    fn from(value: PositiveInt) -> Self {
        Self(value.value())
    }
}
