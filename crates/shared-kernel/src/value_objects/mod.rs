// crates/shared-kernel/src/value_objects/mod.rs
pub mod bounded;

pub use bounded::{BoundKind, BoundedCounter, Bounds, OutOfRangeError};
