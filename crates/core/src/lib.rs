#![allow(clippy::multiple_crate_versions)]

#[cfg(feature = "base64")]
mod base64;
pub mod ensure;
pub mod value_objects;

#[cfg(feature = "base64")]
pub use value_objects::Base64String;
pub use value_objects::{
    BoundedString, BoundedStringBuilder, LuhnNumber, NegativeInt, NonNegativeInt, PositiveInt,
    Timestamp,
};
