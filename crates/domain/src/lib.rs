#![allow(clippy::multiple_crate_versions)]

pub mod arithmetic;
pub mod model;
pub mod sequences;

pub use checkpoints_shared_kernel::{BoundKind, BoundedCounter, Bounds, DomainError, DomainResult, OutOfRangeError};
