#![allow(clippy::multiple_crate_versions)]

pub mod luhn;
pub mod range;

pub use range::{Bound, Range};
