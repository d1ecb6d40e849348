// src/cli/mod.rs
mod args;
mod parsers;
mod value_enum;

pub use args::{Args, Command};
pub use value_enum::CliOutputFormat;
