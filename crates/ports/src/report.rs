// crates/ports/src/report.rs
use checkpoints_shared_kernel::{OutOfRangeError, Result};
use serde::{Deserialize, Serialize};

use crate::scenario::{Scenario, Step, Subject};

/// What happened to a single step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum StepOutcome {
    /// The step committed; `value` is the tracked quantity afterwards.
    Applied { value: i64 },
    /// The step would have left the valid range; nothing changed.
    Rejected { error: OutOfRangeError, value: i64 },
    /// The step was malformed (e.g. a negative amount); nothing changed.
    Invalid { reason: String, value: i64 },
}

impl StepOutcome {
    /// Tracked quantity after the step.
    pub fn value(&self) -> i64 {
        match self {
            Self::Applied { value } | Self::Rejected { value, .. } | Self::Invalid { value, .. } => *value,
        }
    }

    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied { .. })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepReport {
    pub index: usize,
    pub step: Step,
    pub outcome: StepOutcome,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScenarioSummary {
    pub name: String,
    pub applied: usize,
    pub rejected: usize,
    pub final_value: i64,
}

impl ScenarioSummary {
    pub fn all_applied(&self) -> bool {
        self.rejected == 0
    }
}

/// Port receiving scenario progress.
pub trait Reporter: Send + Sync {
    fn on_start(&self, scenario: &Scenario) -> Result<()>;
    fn on_step(&self, subject: &Subject, report: &StepReport) -> Result<()>;
    fn on_complete(&self, summary: &ScenarioSummary) -> Result<()>;
}
