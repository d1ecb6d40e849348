// src/cli/args.rs
use std::path::PathBuf;

use checkpoints_domain::model::Animal;
use clap::{ArgAction, Parser, Subcommand};

use super::{parsers::parse_animal, value_enum::CliOutputFormat};

#[derive(Parser, Debug)]
#[command(name = "checkpoints", version = crate::VERSION, about = "Bounded counters, validated state changes and small checkpoint exercises")]
pub struct Args {
    /// Increase log verbosity (-v: info, -vv: debug, -vvv: trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Replay a scenario file (.json, .yaml, .yml) and report every step
    Run {
        /// Scenario file
        file: PathBuf,

        /// Report format
        #[arg(long, value_enum, default_value = "text")]
        format: CliOutputFormat,

        /// Exit with failure if any step was rejected
        #[arg(long)]
        strict: bool,
    },

    /// Integer square root of a number between 1 and 10000
    Sqrt {
        #[arg(allow_negative_numbers = true)]
        number: i64,
    },

    /// Print FizzBuzz for an inclusive range
    Fizzbuzz {
        #[arg(long, default_value_t = 1)]
        from: u32,
        #[arg(long, default_value_t = 100)]
        to: u32,
    },

    /// Keep the odd numbers, sort them and announce each as lucky
    Lucky {
        /// Numbers to consider (defaults to the classic list)
        #[arg(allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Count items and unique items
    Unique {
        items: Vec<String>,
    },

    /// Let an animal speak (all of them when none is given)
    Speak {
        #[arg(value_parser = parse_animal)]
        animal: Option<Animal>,
    },
}
