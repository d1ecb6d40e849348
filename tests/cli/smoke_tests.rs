use assert_cmd::Command;
use predicates::prelude::*;

fn checkpoints() -> Command {
    Command::new(env!("CARGO_BIN_EXE_checkpoints"))
}

#[test]
fn shows_help() {
    checkpoints()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("checkpoints"))
        .stdout(predicate::str::contains("run"));
}

#[test]
fn help_describes_logging_flags() {
    checkpoints()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Increase log verbosity"))
        .stdout(predicate::str::contains("Only log errors"));
}

#[test]
fn sqrt_of_perfect_square() {
    checkpoints().args(["sqrt", "144"]).assert().success().stdout("The square root of 144 is 12.\n");
}

#[test]
fn sqrt_rejects_out_of_bounds_input() {
    checkpoints()
        .args(["sqrt", "-4"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("-4 is out of bounds"));
    checkpoints().args(["sqrt", "10001"]).assert().failure();
}

#[test]
fn sqrt_without_integer_root_fails() {
    checkpoints()
        .args(["sqrt", "10"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("does not have an integer square root"));
}

#[test]
fn fizzbuzz_range() {
    checkpoints()
        .args(["fizzbuzz", "--from", "9", "--to", "15"])
        .assert()
        .success()
        .stdout("Fizz\nBuzz\n11\nFizz\n13\n14\nFizzBuzz\n");
}

#[test]
fn lucky_defaults_to_classic_list() {
    checkpoints()
        .arg("lucky")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("7 is a lucky number\n15 is a lucky number\n"))
        .stdout(predicate::str::contains("38").not());
}

#[test]
fn unique_counts_items() {
    checkpoints()
        .args(["unique", "a", "b", "c", "d", "e", "e"])
        .assert()
        .success()
        .stdout("There are 6 items in the array.\nThere are 5 unique items in the array.\n");
}

#[test]
fn speak_every_animal() {
    checkpoints()
        .arg("speak")
        .assert()
        .success()
        .stdout(predicate::str::contains("corgi (4 legs): Yip yip!"))
        .stdout(predicate::str::contains("lion (4 legs): Roar!"));
}

#[test]
fn speak_unknown_animal_is_a_usage_error() {
    checkpoints()
        .args(["speak", "dragon"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("dragon"));
}

#[test]
fn verbose_and_quiet_conflict() {
    checkpoints().args(["-v", "-q", "sqrt", "9"]).assert().failure();
}
