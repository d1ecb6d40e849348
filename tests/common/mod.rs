#![allow(dead_code)]

use std::{
    fs,
    path::{Path, PathBuf},
};

use tempfile::TempDir;

pub const GEARBOX_JSON: &str = r#"{
    "name": "commute",
    "subject": { "kind": "car", "make": "Honda", "model": "Accord", "seats": 5, "gears": 5 },
    "steps": [
        { "action": "shift_up", "gears": 4 },
        { "action": "shift_up", "gears": 1 },
        { "action": "shift_down", "gears": 2 }
    ]
}"#;

pub const OVERDRAFT_JSON: &str = r#"{
    "name": "overdraft",
    "subject": { "kind": "account" },
    "steps": [
        { "action": "deposit", "amount": 100 },
        { "action": "withdraw", "amount": 200 },
        { "action": "withdraw", "amount": 100 }
    ]
}"#;

pub const VACATION_YAML: &str = "\
name: summer
subject:
  kind: employee
  name: Alice
steps:
  - action: take_vacation
    days: 10
  - action: take_vacation
    days: 5
  - action: set_remaining
    days: 7
";

/// Temporary directory holding scenario files for a single test.
#[derive(Debug)]
pub struct ScenarioDir {
    dir: TempDir,
}

impl ScenarioDir {
    pub fn new() -> Self {
        Self { dir: tempfile::tempdir().unwrap() }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn write(&self, name: &str, contents: &str) -> PathBuf {
        let path = self.dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }
}
