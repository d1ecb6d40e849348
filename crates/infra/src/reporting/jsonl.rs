// crates/infra/src/reporting/jsonl.rs
use std::{io::Write, sync::Mutex};

use checkpoints_ports::{
    report::{Reporter, ScenarioSummary, StepReport},
    scenario::{Scenario, Subject},
};
use checkpoints_shared_kernel::Result;
use serde::Serialize;

use super::lock;

/// One JSON object per line, tagged by `event`.
pub struct JsonLinesReporter<W> {
    out: Mutex<W>,
}

#[derive(Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
enum Event<'a> {
    Start { name: &'a str, subject: &'a Subject, steps: usize },
    Step(&'a StepReport),
    Complete(&'a ScenarioSummary),
}

impl<W: Write + Send> JsonLinesReporter<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn emit(&self, event: &Event<'_>) -> Result<()> {
        let mut out = lock(&self.out)?;
        serde_json::to_writer(&mut *out, event)?;
        out.write_all(b"\n")?;
        Ok(())
    }
}

impl<W: Write + Send> Reporter for JsonLinesReporter<W> {
    fn on_start(&self, scenario: &Scenario) -> Result<()> {
        self.emit(&Event::Start { name: &scenario.name, subject: &scenario.subject, steps: scenario.steps.len() })
    }

    fn on_step(&self, _subject: &Subject, report: &StepReport) -> Result<()> {
        self.emit(&Event::Step(report))
    }

    fn on_complete(&self, summary: &ScenarioSummary) -> Result<()> {
        self.emit(&Event::Complete(summary))?;
        lock(&self.out)?.flush()?;
        Ok(())
    }
}
