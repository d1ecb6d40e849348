//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`scenario`]: scripted scenarios and where they come from
//! - [`report`]: outcome reporting for scenario runs
//!
//! These ports keep the use cases independent of file formats and
//! presentation.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod report;
pub mod scenario;
