//! Immutable domain primitives that validate on construction.
//!
//! Each constructor takes the parameter name to report failures against.
//! `TryFrom` and serde deserialization run the same checks and report
//! against the parameter `value`.

#[cfg(feature = "base64")]
pub mod base64_string;
pub mod bounded_string;
pub mod integers;
pub mod luhn_number;
pub mod timestamp;

#[cfg(feature = "base64")]
pub use base64_string::Base64String;
pub use bounded_string::{BoundedString, BoundedStringBuilder};
pub use integers::{NegativeInt, NonNegativeInt, PositiveInt};
pub use luhn_number::LuhnNumber;
pub use timestamp::Timestamp;

/// Parameter name used by `TryFrom` and serde conversions.
pub(crate) const CONVERSION_PARAM: &str = "value";
