//! Luhn (mod 10) checksum over decimal digit sequences.
//!
//! Both modes share one weighted-sum routine; they differ only in where the
//! right-to-left walk starts. Validation skips the trailing check digit,
//! generation starts at the last payload digit.

use guardrail_shared_kernel::{GuardError, GuardResult};

/// Parameter that failures in this module are attributed to.
pub const DIGITS_PARAM: &str = "digits";

/// Walk offset from the end when the check digit is part of the input.
const FULL_SEQUENCE_OFFSET: usize = 2;
/// Walk offset from the end when the input is the payload alone.
const CHECK_DIGIT_OFFSET: usize = 1;

const MIN_FULL_LEN: usize = 2;
const MIN_PAYLOAD_LEN: usize = 1;

/// Returns whether the last element of `digits` is the Luhn check digit of the rest.
///
/// # Errors
/// `InvalidArgument` with fewer than two elements, `Format` when an element
/// is not in `0..=9`.
pub fn is_valid(digits: &[u8]) -> GuardResult<bool> {
    ensure_len(digits.len(), MIN_FULL_LEN)?;
    ensure_decimal(digits)?;

    let expected = weighted_check_digit(digits, FULL_SEQUENCE_OFFSET);
    let actual = digits[digits.len() - 1];
    log::trace!("luhn validation over {} digits: expected {expected}, found {actual}", digits.len());
    Ok(expected == actual)
}

/// String form of [`is_valid`]; every character must be an ASCII digit.
///
/// # Errors
/// `Format` when empty or when a character is not a digit,
/// `InvalidArgument` with fewer than two characters.
pub fn is_valid_str(digits: &str) -> GuardResult<bool> {
    if digits.is_empty() {
        return Err(GuardError::format(DIGITS_PARAM, "Must not be empty."));
    }
    ensure_len(digits.chars().count(), MIN_FULL_LEN)?;
    is_valid(&parse_digits(digits)?)
}

/// Computes the digit that, appended to `payload`, makes it Luhn-valid.
///
/// # Errors
/// `InvalidArgument` when `payload` is empty, `Format` when an element is not
/// in `0..=9`.
pub fn check_digit(payload: &[u8]) -> GuardResult<u8> {
    ensure_len(payload.len(), MIN_PAYLOAD_LEN)?;
    ensure_decimal(payload)?;

    let digit = weighted_check_digit(payload, CHECK_DIGIT_OFFSET);
    log::trace!("luhn check digit over {} digits: {digit}", payload.len());
    Ok(digit)
}

/// String form of [`check_digit`].
///
/// # Errors
/// `Format` when a character is not an ASCII digit, `InvalidArgument` when
/// `payload` is empty.
pub fn check_digit_str(payload: &str) -> GuardResult<u8> {
    check_digit(&parse_digits(payload)?)
}

/// Returns `payload` followed by its check digit.
///
/// # Errors
/// Same as [`check_digit_str`].
pub fn append_check_digit(payload: &str) -> GuardResult<String> {
    let digit = check_digit_str(payload)?;
    let mut full = String::with_capacity(payload.len() + 1);
    full.push_str(payload);
    full.push(char::from(b'0' + digit));
    Ok(full)
}

/// Sums the digits right to left starting `offset` elements from the end,
/// doubling every other one (the first included), and rounds up to the next
/// multiple of ten.
///
/// Callers guarantee `digits.len() + 1 >= offset` and that every element is a
/// decimal digit.
fn weighted_check_digit(digits: &[u8], offset: usize) -> u8 {
    let considered = &digits[..digits.len() + 1 - offset];
    let sum = considered
        .iter()
        .rev()
        .enumerate()
        .fold(0u8, |acc, (position, &digit)| {
            let weighted = if position % 2 == 0 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            };
            (acc + weighted) % 10
        });
    (10 - sum) % 10
}

fn ensure_len(len: usize, min: usize) -> GuardResult<()> {
    if len < min {
        let unit = if min == 1 { "digit" } else { "digits" };
        return Err(GuardError::invalid_argument(
            DIGITS_PARAM,
            format!("Must contain at least {min} {unit}; got {len}."),
        ));
    }
    Ok(())
}

fn ensure_decimal(digits: &[u8]) -> GuardResult<()> {
    if let Some(position) = digits.iter().position(|&d| d > 9) {
        return Err(GuardError::format(
            DIGITS_PARAM,
            format!(
                "Every element must be a decimal digit (0-9); found {} at index {position}.",
                digits[position]
            ),
        ));
    }
    Ok(())
}

fn parse_digits(digits: &str) -> GuardResult<Vec<u8>> {
    digits
        .chars()
        .enumerate()
        .map(|(position, c)| {
            c.to_digit(10)
                .and_then(|d| u8::try_from(d).ok())
                .ok_or_else(|| {
                    GuardError::format(
                        DIGITS_PARAM,
                        format!("Must contain only digits; found '{c}' at index {position}."),
                    )
                })
        })
        .collect()
}
