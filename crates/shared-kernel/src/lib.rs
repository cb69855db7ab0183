// crates/shared-kernel/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub use error::{ErrorContext, ErrorKind, GuardError, GuardResult};

pub mod error;
pub mod value_objects;

pub use value_objects::ParamName;
