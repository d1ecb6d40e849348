// crates/infra/src/reporting/text.rs
use std::{io::Write, sync::Mutex};

use checkpoints_ports::{
    report::{Reporter, ScenarioSummary, StepOutcome, StepReport},
    scenario::{Scenario, Step, Subject},
};
use checkpoints_shared_kernel::{BoundKind, Result};

use super::{lock, write_lines};

/// Human-readable console messages.
pub struct TextReporter<W> {
    out: Mutex<W>,
}

impl<W: Write + Send> TextReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl<W: Write + Send> Reporter for TextReporter<W> {
    fn on_start(&self, scenario: &Scenario) -> Result<()> {
        let mut out = lock(&self.out)?;
        write_lines(&mut *out, &[format!("== {} ==", scenario.name), introduce(&scenario.subject)])
    }

    fn on_step(&self, subject: &Subject, report: &StepReport) -> Result<()> {
        let mut out = lock(&self.out)?;
        write_lines(&mut *out, &describe(subject, report))
    }

    fn on_complete(&self, summary: &ScenarioSummary) -> Result<()> {
        let mut out = lock(&self.out)?;
        write_lines(
            &mut *out,
            &[format!(
                "-- {} applied, {} rejected, final value {}",
                summary.applied, summary.rejected, summary.final_value
            )],
        )
    }
}

fn introduce(subject: &Subject) -> String {
    match subject {
        Subject::Car { make, model, .. } => format!("Your {make} {model} is in gear 1."),
        Subject::Account { funds } => format!("Balance: {funds}"),
        Subject::Employee { name, allocated } => format!("{name} has {allocated} vacation days."),
        Subject::Counter { lower, upper, initial } => format!("Counter starts at {initial} in [{lower}, {upper}]"),
    }
}

/// Messages for one step, one entry per line.
pub fn describe(subject: &Subject, report: &StepReport) -> Vec<String> {
    let step = report.step;
    match (&report.outcome, subject) {
        (StepOutcome::Invalid { reason, .. }, _) => vec![format!("Step {} ignored: {reason}", report.index)],

        (StepOutcome::Applied { value }, Subject::Car { make, model, .. }) => {
            let shift = match step {
                Step::ShiftDown { gears } => format!("Shifting down {gears} gear(s)."),
                _ => format!("Shifting up {} gear(s)...", step.amount()),
            };
            vec![shift, format!("Your {make} {model} is now in gear {value}.")]
        }
        (StepOutcome::Rejected { error, .. }, Subject::Car { model, .. }) => {
            let direction = match error.bound() {
                BoundKind::Upper => "high",
                BoundKind::Lower => "low",
            };
            vec![format!("You can't shift your {model} that {direction}!")]
        }

        (StepOutcome::Applied { value }, Subject::Account { .. }) => match step {
            Step::Deposit { amount } => vec![format!("Deposited {amount}. Balance: {value}")],
            _ => vec![format!("Withdrew money successfully. Balance: {value}")],
        },
        (StepOutcome::Rejected { error, .. }, Subject::Account { .. }) => match error.bound() {
            BoundKind::Lower => vec!["Insufficient funds".to_string()],
            BoundKind::Upper => vec!["Deposit rejected: the balance cannot hold that much".to_string()],
        },

        (StepOutcome::Applied { value }, Subject::Employee { .. }) => match step {
            Step::TakeVacation { .. } => {
                vec!["I'm going on vacation!".to_string(), format!("{value} vacation days remaining.")]
            }
            _ => vec![format!("{value} vacation days remaining.")],
        },
        (StepOutcome::Rejected { error, .. }, Subject::Employee { .. }) => match (step, error.bound()) {
            (Step::TakeVacation { .. }, BoundKind::Lower) => {
                vec!["Sorry, you don't have enough vacation days.".to_string()]
            }
            _ => vec![format!("Vacation allocation rejected: {error}")],
        },

        (StepOutcome::Applied { value }, Subject::Counter { .. }) => vec![format!("value is now {value}")],
        (StepOutcome::Rejected { error, value }, Subject::Counter { .. }) => {
            vec![format!("{} rejected: {error}; value stays {value}", error.attempted())]
        }
    }
}
