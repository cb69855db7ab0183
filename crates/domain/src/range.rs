//! Boundary checks over any totally ordered type.
//!
//! A [`Range`] has up to two [`Bound`]s, each inclusive or exclusive. Ranges
//! are validated once at construction and can then be reused for any number
//! of [`Range::is_within`] calls.
//!
//! ```
//! use guardrail_domain::Range;
//!
//! let percent = Range::between(0, 100).unwrap();
//! assert_eq!(percent.is_within(42, "ratio", None).unwrap(), 42);
//! assert!(percent.is_within(101, "ratio", None).is_err());
//! ```

use std::{cmp::Ordering, fmt};

use guardrail_shared_kernel::{GuardError, GuardResult};

/// Parameter that construction failures are attributed to.
const RANGE_PARAM: &str = "range";

/// One edge of a [`Range`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bound<T> {
    value: T,
    inclusive: bool,
}

impl<T> Bound<T> {
    #[inline]
    pub const fn new(value: T, inclusive: bool) -> Self {
        Self { value, inclusive }
    }

    #[inline]
    pub const fn inclusive(value: T) -> Self {
        Self::new(value, true)
    }

    #[inline]
    pub const fn exclusive(value: T) -> Self {
        Self::new(value, false)
    }

    #[inline]
    pub const fn value(&self) -> &T {
        &self.value
    }

    #[inline]
    pub const fn is_inclusive(&self) -> bool {
        self.inclusive
    }

    pub fn into_value(self) -> T {
        self.value
    }
}

/// Interval with an optional lower and an optional upper [`Bound`].
///
/// # Invariants
/// At least one bound is present, and when both are, the lower value is
/// strictly less than the upper value. The inclusive flags play no part in
/// that ordering check, so `[5, 5]` is rejected as well as `(5, 5]`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Range<T> {
    lower: Option<Bound<T>>,
    upper: Option<Bound<T>>,
}

/// Which side of a range a value fell off.
enum Violation<'a, T> {
    BelowLower(&'a Bound<T>),
    AboveUpper(&'a Bound<T>),
}

impl<T: fmt::Display> Violation<'_, T> {
    fn default_message(&self) -> String {
        match self {
            Self::BelowLower(bound) if bound.inclusive => {
                format!("Must be greater than or equal to {}.", bound.value)
            }
            Self::BelowLower(bound) => format!("Must be greater than {}.", bound.value),
            Self::AboveUpper(bound) if bound.inclusive => {
                format!("Must be less than or equal to {}.", bound.value)
            }
            Self::AboveUpper(bound) => format!("Must be less than {}.", bound.value),
        }
    }
}

impl<T: Ord> Range<T> {
    /// General form; either bound may be absent, but not both.
    pub fn new(lower: Option<Bound<T>>, upper: Option<Bound<T>>) -> GuardResult<Self> {
        match (&lower, &upper) {
            (None, None) => Err(GuardError::invalid_argument(
                RANGE_PARAM,
                "A range without any boundary is useless.",
            )),
            (Some(lower), Some(upper)) if lower.value >= upper.value => {
                Err(GuardError::invalid_argument(
                    RANGE_PARAM,
                    "Lower boundary must be less than upper boundary.",
                ))
            }
            _ => Ok(Self { lower, upper }),
        }
    }

    pub fn lower_only(value: T, inclusive: bool) -> GuardResult<Self> {
        Self::new(Some(Bound::new(value, inclusive)), None)
    }

    pub fn upper_only(value: T, inclusive: bool) -> GuardResult<Self> {
        Self::new(None, Some(Bound::new(value, inclusive)))
    }

    /// Both bounds inclusive.
    pub fn between(from: T, to: T) -> GuardResult<Self> {
        Self::new(Some(Bound::inclusive(from)), Some(Bound::inclusive(to)))
    }

    pub fn lower(&self) -> Option<&Bound<T>> {
        self.lower.as_ref()
    }

    pub fn upper(&self) -> Option<&Bound<T>> {
        self.upper.as_ref()
    }

    /// Non-raising membership test with the same rules as [`Range::is_within`].
    pub fn contains(&self, value: &T) -> bool {
        self.violation(value).is_none()
    }

    /// Returns `value` unchanged when it lies in the range.
    ///
    /// The lower bound is checked first. On failure the error names `param`,
    /// carries the offending value and uses `message` when given, otherwise a
    /// message describing the violated bound.
    ///
    /// # Errors
    /// [`GuardError::OutOfRange`] when `value` lies outside the range.
    pub fn is_within(&self, value: T, param: &str, message: Option<&str>) -> GuardResult<T>
    where
        T: fmt::Display,
    {
        let Some(violation) = self.violation(&value) else {
            return Ok(value);
        };
        let message = message.map_or_else(|| violation.default_message(), str::to_string);
        log::debug!("argument '{param}' out of range {self}: {value}");
        Err(GuardError::out_of_range(param, &value, message))
    }

    fn violation(&self, value: &T) -> Option<Violation<'_, T>> {
        if let Some(lower) = &self.lower {
            let ord = value.cmp(&lower.value);
            let below = if lower.inclusive {
                ord == Ordering::Less
            } else {
                ord != Ordering::Greater
            };
            if below {
                return Some(Violation::BelowLower(lower));
            }
        }
        if let Some(upper) = &self.upper {
            let ord = value.cmp(&upper.value);
            let above = if upper.inclusive {
                ord == Ordering::Greater
            } else {
                ord != Ordering::Less
            };
            if above {
                return Some(Violation::AboveUpper(upper));
            }
        }
        None
    }
}

/// Interval notation, e.g. `[0, 10)` or `(5, inf)`.
impl<T: fmt::Display> fmt::Display for Range<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.lower {
            Some(bound) if bound.inclusive => write!(f, "[{}", bound.value)?,
            Some(bound) => write!(f, "({}", bound.value)?,
            None => f.write_str("(-inf")?,
        }
        f.write_str(", ")?;
        match &self.upper {
            Some(bound) if bound.inclusive => write!(f, "{}]", bound.value),
            Some(bound) => write!(f, "{})", bound.value),
            None => f.write_str("inf)"),
        }
    }
}
