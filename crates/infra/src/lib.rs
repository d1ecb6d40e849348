// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod loader;
pub mod persistence;
pub mod reporting;

pub use loader::{FileScenarioSource, ScenarioFormat};
pub use reporting::{JsonLinesReporter, TextReporter};
