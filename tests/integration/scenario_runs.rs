// tests/integration/scenario_runs.rs
use assert_cmd::Command;
use predicates::prelude::*;

#[path = "../common/mod.rs"]
mod common;
use common::{GEARBOX_JSON, OVERDRAFT_JSON, ScenarioDir, VACATION_YAML};

fn run(args: &[&str]) -> assert_cmd::assert::Assert {
    Command::new(env!("CARGO_BIN_EXE_checkpoints")).arg("run").args(args).assert()
}

#[test]
fn car_scenario_reports_every_shift() {
    let dir = ScenarioDir::new();
    let file = dir.write("commute.json", GEARBOX_JSON);

    run(&[file.to_str().unwrap()]).success().stdout(
        "== commute ==\n\
         Your Honda Accord is in gear 1.\n\
         Shifting up 4 gear(s)...\n\
         Your Honda Accord is now in gear 5.\n\
         You can't shift your Accord that high!\n\
         Shifting down 2 gear(s).\n\
         Your Honda Accord is now in gear 3.\n\
         -- 2 applied, 1 rejected, final value 3\n",
    );
}

#[test]
fn withdrawing_to_zero_is_allowed() {
    let dir = ScenarioDir::new();
    let file = dir.write("overdraft.json", OVERDRAFT_JSON);

    run(&[file.to_str().unwrap()])
        .success()
        .stdout(predicate::str::contains("Insufficient funds"))
        .stdout(predicate::str::contains("Withdrew money successfully. Balance: 0"))
        .stdout(predicate::str::ends_with("-- 2 applied, 1 rejected, final value 0\n"));
}

#[test]
fn strict_mode_fails_when_a_step_is_rejected() {
    let dir = ScenarioDir::new();
    let file = dir.write("overdraft.json", OVERDRAFT_JSON);

    run(&["--strict", file.to_str().unwrap()]).failure().stdout(predicate::str::contains("Insufficient funds"));
}

#[test]
fn yaml_vacation_scenario() {
    let dir = ScenarioDir::new();
    let file = dir.write("summer.yaml", VACATION_YAML);

    run(&[file.to_str().unwrap()])
        .success()
        .stdout(predicate::str::contains("Alice has 14 vacation days."))
        .stdout(predicate::str::contains("I'm going on vacation!\n4 vacation days remaining."))
        .stdout(predicate::str::contains("Sorry, you don't have enough vacation days."))
        .stdout(predicate::str::ends_with("7 vacation days remaining.\n-- 2 applied, 1 rejected, final value 7\n"));
}

#[test]
fn negative_amount_is_reported_but_not_applied() {
    let dir = ScenarioDir::new();
    let file = dir.write(
        "sneaky.json",
        r#"{"name":"sneaky","subject":{"kind":"account","funds":50},"steps":[{"action":"withdraw","amount":-10}]}"#,
    );

    run(&["--strict", file.to_str().unwrap()])
        .failure()
        .stdout(predicate::str::contains("Step 0 ignored"))
        .stdout(predicate::str::contains("final value 50"));
}

#[test]
fn step_for_another_subject_aborts_the_run() {
    let dir = ScenarioDir::new();
    let file = dir.write(
        "confused.json",
        r#"{"name":"confused","subject":{"kind":"car","make":"Honda","model":"Accord","seats":5,"gears":5},"steps":[{"action":"deposit","amount":10}]}"#,
    );

    run(&[file.to_str().unwrap()]).failure().stderr(predicate::str::contains("scenario 'confused' aborted"));
}

#[test]
fn invalid_subject_is_an_error() {
    let dir = ScenarioDir::new();
    let file = dir.write(
        "backwards.json",
        r#"{"name":"backwards","subject":{"kind":"counter","lower":10,"upper":1,"initial":5}}"#,
    );

    run(&[file.to_str().unwrap()]).failure().stderr(predicate::str::starts_with("Error:"));
}

#[test]
fn missing_file_is_an_error() {
    let dir = ScenarioDir::new();
    let file = dir.path().join("nowhere.json");

    run(&[file.to_str().unwrap()]).failure().stderr(predicate::str::contains("failed to load scenario"));
}

#[test]
fn unknown_extension_is_an_error() {
    let dir = ScenarioDir::new();
    let file = dir.write("commute.toml", "name = 'commute'");

    run(&[file.to_str().unwrap()]).failure().stderr(predicate::str::contains("unknown extension"));
}
