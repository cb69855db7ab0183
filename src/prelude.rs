//! Items most callers need, for glob import.

#[cfg(feature = "base64")]
pub use guardrail_core::Base64String;
pub use guardrail_core::{
    BoundedString, BoundedStringBuilder, LuhnNumber, NegativeInt, NonNegativeInt, PositiveInt,
    Timestamp, ensure,
};
pub use guardrail_domain::{Bound, Range, luhn};
pub use guardrail_shared_kernel::{ErrorContext, ErrorKind, GuardError, GuardResult};
