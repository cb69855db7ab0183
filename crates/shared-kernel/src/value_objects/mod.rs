// crates/shared-kernel/src/value_objects/mod.rs
pub mod param_name;

pub use param_name::ParamName;
