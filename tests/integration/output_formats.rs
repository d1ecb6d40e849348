// tests/integration/output_formats.rs
use std::process::ExitCode;

use checkpoints::{
    app,
    config::{Config, OutputFormat, Task},
};
use log::LevelFilter;
use serde_json::Value;

#[path = "../common/mod.rs"]
mod common;
use common::{GEARBOX_JSON, ScenarioDir};

fn replay(format: OutputFormat) -> (ExitCode, String) {
    let dir = ScenarioDir::new();
    let file = dir.write("commute.json", GEARBOX_JSON);
    let config = Config { log_level: LevelFilter::Off, task: Task::RunScenario { file, format, strict: false } };

    let mut out = Vec::new();
    let code = app::run(&config, &mut out).unwrap();
    (code, String::from_utf8(out).unwrap())
}

#[test]
fn jsonl_emits_start_steps_and_summary() {
    let (code, text) = replay(OutputFormat::Jsonl);
    assert_eq!(code, ExitCode::SUCCESS);

    let events: Vec<Value> = text.lines().map(|line| serde_json::from_str(line).unwrap()).collect();
    assert_eq!(events.len(), 5);

    assert_eq!(events[0]["event"], "start");
    assert_eq!(events[0]["name"], "commute");
    assert_eq!(events[0]["steps"], 3);

    assert_eq!(events[1]["outcome"]["status"], "applied");
    assert_eq!(events[1]["outcome"]["value"], 5);

    assert_eq!(events[2]["outcome"]["status"], "rejected");
    assert_eq!(events[2]["outcome"]["error"]["attempted"], 6);
    assert_eq!(events[2]["outcome"]["error"]["limit"], 5);
    assert_eq!(events[2]["outcome"]["value"], 5);

    assert_eq!(events[4]["event"], "complete");
    assert_eq!(events[4]["applied"], 2);
    assert_eq!(events[4]["rejected"], 1);
    assert_eq!(events[4]["final_value"], 3);
}

#[test]
fn text_and_jsonl_agree_on_the_summary() {
    let (_, text) = replay(OutputFormat::Text);
    let (_, jsonl) = replay(OutputFormat::Jsonl);

    let last: Value = serde_json::from_str(jsonl.lines().last().unwrap()).unwrap();
    let expected = format!(
        "-- {} applied, {} rejected, final value {}",
        last["applied"], last["rejected"], last["final_value"]
    );
    assert_eq!(text.lines().last(), Some(expected.as_str()));
}
