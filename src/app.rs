// src/app.rs
use std::{io::Write, path::Path, process::ExitCode};

use anyhow::{Context, Result};
use checkpoints_domain::{
    arithmetic::{SQRT_INPUT, integer_sqrt},
    model::Animal,
    sequences::{fizzbuzz, lucky_numbers, unique_count},
};
use checkpoints_infra::{FileScenarioSource, JsonLinesReporter, TextReporter};
use checkpoints_ports::{
    report::{Reporter, ScenarioSummary},
    scenario::ScenarioSource,
};
use checkpoints_shared_kernel::{BoundKind, DomainError};
use checkpoints_usecase::RunScenario;
use log::{info, warn};

use crate::config::{Config, OutputFormat, Task};

/// Executes the configured task, writing results to `out`.
pub fn run(config: &Config, out: &mut (dyn Write + Send)) -> Result<ExitCode> {
    match &config.task {
        Task::RunScenario { file, format, strict } => run_scenario(file, *format, *strict, out),
        Task::Sqrt(number) => sqrt(*number, out),
        Task::FizzBuzz { from, to } => {
            for value in fizzbuzz(*from..=*to) {
                writeln!(out, "{value}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Task::Lucky(numbers) => {
            for line in lucky_numbers(numbers) {
                writeln!(out, "{line}")?;
            }
            Ok(ExitCode::SUCCESS)
        }
        Task::Unique(items) => {
            let count = unique_count(items.iter());
            writeln!(out, "There are {} items in the array.", count.total)?;
            writeln!(out, "There are {} unique items in the array.", count.unique)?;
            Ok(ExitCode::SUCCESS)
        }
        Task::Speak(animal) => {
            let animals = match animal {
                Some(animal) => vec![*animal],
                None => Animal::all().to_vec(),
            };
            for animal in animals {
                writeln!(out, "{animal} ({} legs): {}", animal.legs(), animal.speak())?;
            }
            Ok(ExitCode::SUCCESS)
        }
    }
}

fn run_scenario(file: &Path, format: OutputFormat, strict: bool, out: &mut (dyn Write + Send)) -> Result<ExitCode> {
    let scenario = FileScenarioSource::new()
        .load(file)
        .with_context(|| format!("failed to load scenario from {}", file.display()))?;

    let summary = match format {
        OutputFormat::Text => replay(&TextReporter::new(&mut *out), &scenario)?,
        OutputFormat::Jsonl => replay(&JsonLinesReporter::new(&mut *out), &scenario)?,
    };

    if strict && !summary.all_applied() {
        warn!("{} step(s) of '{}' were rejected", summary.rejected, summary.name);
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn replay(reporter: &dyn Reporter, scenario: &checkpoints_ports::scenario::Scenario) -> Result<ScenarioSummary> {
    RunScenario::new(reporter)
        .run(scenario)
        .with_context(|| format!("scenario '{}' aborted", scenario.name))
}

fn sqrt(number: i64, out: &mut (dyn Write + Send)) -> Result<ExitCode> {
    match integer_sqrt(number) {
        Ok(root) => {
            writeln!(out, "The square root of {number} is {root}.")?;
            Ok(ExitCode::SUCCESS)
        }
        Err(DomainError::OutOfRange(err)) => {
            let (lower, upper) = SQRT_INPUT;
            let side = match err.bound() {
                BoundKind::Lower => "too small",
                BoundKind::Upper => "too large",
            };
            info!("sqrt input {number} is {side}");
            writeln!(out, "{number} is out of bounds ({lower}..={upper}). Choose a different number.")?;
            Ok(ExitCode::FAILURE)
        }
        Err(DomainError::NoIntegerRoot { .. }) => {
            writeln!(out, "{number} does not have an integer square root. Choose a different number.")?;
            Ok(ExitCode::FAILURE)
        }
        Err(other) => Err(other.into()),
    }
}
