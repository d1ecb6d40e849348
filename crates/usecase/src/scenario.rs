// crates/usecase/src/scenario.rs
use checkpoints_ports::{
    report::{Reporter, ScenarioSummary, StepOutcome, StepReport},
    scenario::Scenario,
};
use checkpoints_shared_kernel::{ApplicationError, DomainError, Result};
use log::{debug, info};

use crate::record::Record;

/// Replays a [`Scenario`] and reports every step.
///
/// Rejected and invalid steps are reported and the run continues; only a
/// subject that cannot be built or a step that does not fit the subject
/// aborts the run.
pub struct RunScenario<'a> {
    reporter: &'a dyn Reporter,
}

impl<'a> RunScenario<'a> {
    pub fn new(reporter: &'a dyn Reporter) -> Self {
        Self { reporter }
    }

    pub fn run(&self, scenario: &Scenario) -> Result<ScenarioSummary> {
        info!("running scenario '{}' ({} steps) on a {}", scenario.name, scenario.steps.len(), scenario.subject.kind());

        let mut record = Record::build(&scenario.subject).map_err(|source| ApplicationError::SubjectConstruction {
            scenario: scenario.name.clone(),
            source,
        })?;
        self.reporter.on_start(scenario)?;

        let mut summary = ScenarioSummary {
            name: scenario.name.clone(),
            applied: 0,
            rejected: 0,
            final_value: record.value(),
        };

        for (index, step) in scenario.steps.iter().copied().enumerate() {
            let result = record.apply(step).ok_or_else(|| ApplicationError::StepNotApplicable {
                index,
                step: step.to_string(),
                subject: scenario.subject.kind().to_string(),
            })?;

            let outcome = to_outcome(result, record.value());
            if outcome.is_applied() {
                summary.applied += 1;
                debug!("step {index} ({step}) applied, value is now {}", outcome.value());
            } else {
                summary.rejected += 1;
                debug!("step {index} ({step}) rejected: {outcome:?}");
            }

            self.reporter.on_step(&scenario.subject, &StepReport { index, step, outcome })?;
        }

        summary.final_value = record.value();
        info!(
            "scenario '{}' finished: {} applied, {} rejected, final value {}",
            summary.name, summary.applied, summary.rejected, summary.final_value
        );
        self.reporter.on_complete(&summary)?;
        Ok(summary)
    }
}

fn to_outcome(result: std::result::Result<i64, DomainError>, value: i64) -> StepOutcome {
    match result {
        Ok(value) => StepOutcome::Applied { value },
        Err(DomainError::OutOfRange(error)) => StepOutcome::Rejected { error, value },
        Err(other) => StepOutcome::Invalid { reason: other.to_string(), value },
    }
}
