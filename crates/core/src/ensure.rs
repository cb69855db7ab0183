//! Argument guards.
//!
//! Every guard names the argument it checks and either hands the value back
//! or fails immediately. Parameter names must not be blank; a blank name is
//! reported as `InvalidArgument` against `param_name`.
//!
//! ```
//! use guardrail_core::ensure;
//!
//! fn discount(percent: u8) -> guardrail_shared_kernel::GuardResult<u8> {
//!     ensure::between(percent, 0, 100, "percent", None)
//! }
//!
//! assert_eq!(discount(15).unwrap(), 15);
//! assert!(discount(120).is_err());
//! ```

use std::fmt::Display;

use guardrail_domain::{Range, luhn};
use guardrail_shared_kernel::{GuardError, GuardResult, ParamName};

/// Parameter that a blank custom message is reported against.
const MESSAGE_PARAM: &str = "message";

fn reject<T>(err: GuardError) -> GuardResult<T> {
    log::debug!("guard rejected '{}' ({}): {}", err.param(), err.kind(), err.message());
    Err(err)
}

fn checked_message(message: Option<&str>) -> GuardResult<Option<&str>> {
    match message {
        Some(text) if text.trim().is_empty() => reject(GuardError::invalid_argument(
            MESSAGE_PARAM,
            "Custom message must not be empty or whitespace.",
        )),
        other => Ok(other),
    }
}

fn bounded<T: Ord>(range: GuardResult<Range<T>>, param: &str) -> GuardResult<Range<T>> {
    range.or_else(|err| reject(err.with_param(param)))
}

pub fn not_null<T>(value: Option<T>, param: &str) -> GuardResult<T> {
    ParamName::check(param)?;
    match value {
        Some(value) => Ok(value),
        None => reject(GuardError::null_reference(param)),
    }
}

pub fn not_null_or_empty<'a>(value: Option<&'a str>, param: &str) -> GuardResult<&'a str> {
    let value = not_null(value, param)?;
    if value.is_empty() {
        return reject(GuardError::invalid_argument(param, "Value must not be empty."));
    }
    Ok(value)
}

pub fn not_null_or_whitespace<'a>(value: Option<&'a str>, param: &str) -> GuardResult<&'a str> {
    let value = not_null(value, param)?;
    if value.trim().is_empty() {
        return reject(GuardError::invalid_argument(
            param,
            "Value must not be empty or whitespace.",
        ));
    }
    Ok(value)
}

pub fn not_empty<'a, T>(items: &'a [T], param: &str) -> GuardResult<&'a [T]> {
    ParamName::check(param)?;
    if items.is_empty() {
        return reject(GuardError::invalid_argument(param, "Collection must not be empty."));
    }
    Ok(items)
}

/// Fails unless `value < other`.
pub fn less_than<T>(value: T, other: T, param: &str, message: Option<&str>) -> GuardResult<T>
where
    T: Ord + Display,
{
    ParamName::check(param)?;
    let message = checked_message(message)?;
    bounded(Range::upper_only(other, false), param)?.is_within(value, param, message)
}

/// Fails unless `value <= other`.
pub fn less_than_or_equal_to<T>(
    value: T,
    other: T,
    param: &str,
    message: Option<&str>,
) -> GuardResult<T>
where
    T: Ord + Display,
{
    ParamName::check(param)?;
    let message = checked_message(message)?;
    bounded(Range::upper_only(other, true), param)?.is_within(value, param, message)
}

/// Fails unless `value > other`.
pub fn greater_than<T>(value: T, other: T, param: &str, message: Option<&str>) -> GuardResult<T>
where
    T: Ord + Display,
{
    ParamName::check(param)?;
    let message = checked_message(message)?;
    bounded(Range::lower_only(other, false), param)?.is_within(value, param, message)
}

/// Fails unless `value >= other`.
pub fn greater_than_or_equal_to<T>(
    value: T,
    other: T,
    param: &str,
    message: Option<&str>,
) -> GuardResult<T>
where
    T: Ord + Display,
{
    ParamName::check(param)?;
    let message = checked_message(message)?;
    bounded(Range::lower_only(other, true), param)?.is_within(value, param, message)
}

/// Fails unless `from <= value <= to`. `from` must be strictly less than `to`.
pub fn between<T>(
    value: T,
    from_inclusive: T,
    to_inclusive: T,
    param: &str,
    message: Option<&str>,
) -> GuardResult<T>
where
    T: Ord + Display,
{
    ParamName::check(param)?;
    let message = checked_message(message)?;
    bounded(Range::between(from_inclusive, to_inclusive), param)?.is_within(value, param, message)
}

/// Checks `value` against a prebuilt range.
pub fn within<T>(value: T, range: &Range<T>, param: &str, message: Option<&str>) -> GuardResult<T>
where
    T: Ord + Display,
{
    ParamName::check(param)?;
    let message = checked_message(message)?;
    range.is_within(value, param, message)
}

/// Fails unless `digits` is a digit string with a valid Luhn checksum.
pub fn valid_luhn_checksum<'a>(digits: &'a str, param: &str) -> GuardResult<&'a str> {
    ParamName::check(param)?;
    match luhn::is_valid_str(digits) {
        Ok(true) => Ok(digits),
        Ok(false) => reject(checksum_mismatch(param)),
        Err(err) => reject(err.with_param(param)),
    }
}

/// Slice form of [`valid_luhn_checksum`].
pub fn valid_luhn_digits<'a>(digits: &'a [u8], param: &str) -> GuardResult<&'a [u8]> {
    ParamName::check(param)?;
    match luhn::is_valid(digits) {
        Ok(true) => Ok(digits),
        Ok(false) => reject(checksum_mismatch(param)),
        Err(err) => reject(err.with_param(param)),
    }
}

fn checksum_mismatch(param: &str) -> GuardError {
    GuardError::format(param, "Must have a valid Luhn checksum.")
}

/// Converts a raw discriminant into `E`, failing when it names no variant.
///
/// ```
/// use guardrail_core::ensure;
///
/// #[derive(Debug, PartialEq)]
/// enum Level { Low, High }
///
/// impl TryFrom<u8> for Level {
///     type Error = ();
///     fn try_from(raw: u8) -> Result<Self, ()> {
///         match raw {
///             0 => Ok(Level::Low),
///             1 => Ok(Level::High),
///             _ => Err(()),
///         }
///     }
/// }
///
/// assert_eq!(ensure::defined_enum::<Level, u8>(1, "level").unwrap(), Level::High);
/// assert!(ensure::defined_enum::<Level, u8>(7, "level").is_err());
/// ```
pub fn defined_enum<E, R>(raw: R, param: &str) -> GuardResult<E>
where
    E: TryFrom<R>,
    R: Copy + Display,
{
    ParamName::check(param)?;
    E::try_from(raw).or_else(|_| {
        let type_name = std::any::type_name::<E>();
        let short = type_name.rsplit("::").next().unwrap_or(type_name);
        reject(GuardError::out_of_range(
            param,
            raw,
            format!("Must be a defined {short} value."),
        ))
    })
}

/// Fails unless `value` is canonical padded Base64.
#[cfg(feature = "base64")]
pub fn valid_base64<'a>(value: &'a str, param: &str) -> GuardResult<&'a str> {
    ParamName::check(param)?;
    if crate::base64::is_canonical(value) {
        Ok(value)
    } else {
        reject(GuardError::format(param, "Must be a valid Base64 string."))
    }
}
