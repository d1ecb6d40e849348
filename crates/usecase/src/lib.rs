//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`scenario`]: replays a scripted scenario against a domain record
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod record;
pub mod scenario;

pub use record::Record;
pub use scenario::RunScenario;
