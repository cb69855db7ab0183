//! Fail-fast argument guards and validated domain primitives.
//!
//! ```
//! use guardrail::prelude::*;
//!
//! fn reserve(seats: i64, card: &str) -> GuardResult<(PositiveInt, LuhnNumber)> {
//!     let seats = PositiveInt::new(seats, "seats")?;
//!     let card = LuhnNumber::new(card, "card")?;
//!     Ok((seats, card))
//! }
//!
//! assert!(reserve(2, "79927398713").is_ok());
//! assert_eq!(reserve(0, "79927398713").unwrap_err().kind(), ErrorKind::OutOfRange);
//! ```
#![allow(clippy::multiple_crate_versions)]

pub use guardrail_core::{ensure, value_objects};
pub use guardrail_domain::{Bound, Range, luhn};
pub use guardrail_shared_kernel::{ErrorContext, ErrorKind, GuardError, GuardResult, ParamName};

pub mod prelude;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
