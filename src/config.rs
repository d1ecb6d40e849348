// src/config.rs
use std::path::PathBuf;

use log::LevelFilter;
use serde::{Deserialize, Serialize};

use crate::{
    cli::{Args, Command},
    logging::level_from_flags,
};

/// Scenario report encodings.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Jsonl,
}

/// What the binary should do, resolved from the command line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Task {
    RunScenario { file: PathBuf, format: OutputFormat, strict: bool },
    Sqrt(i64),
    FizzBuzz { from: u32, to: u32 },
    Lucky(Vec<i64>),
    Unique(Vec<String>),
    Speak(Option<checkpoints_domain::model::Animal>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub log_level: LevelFilter,
    pub task: Task,
}

impl From<Args> for Config {
    fn from(args: Args) -> Self {
        let task = match args.command {
            Command::Run { file, format, strict } => Task::RunScenario { file, format: format.into(), strict },
            Command::Sqrt { number } => Task::Sqrt(number),
            Command::Fizzbuzz { from, to } => Task::FizzBuzz { from, to },
            Command::Lucky { numbers } if numbers.is_empty() => {
                Task::Lucky(checkpoints_domain::sequences::DEFAULT_LUCKY_NUMBERS.to_vec())
            }
            Command::Lucky { numbers } => Task::Lucky(numbers),
            Command::Unique { items } => Task::Unique(items),
            Command::Speak { animal } => Task::Speak(animal),
        };
        Self { log_level: level_from_flags(args.verbose, args.quiet), task }
    }
}
