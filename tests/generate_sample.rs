//! The sample generator's output must load in `blocktime`.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn generated_sample_loads_and_averages() {
    let dir = tempfile::tempdir().unwrap();
    let csv = dir.path().join("sample.csv");

    Command::cargo_bin("generate_sample")
        .unwrap()
        .arg("--output")
        .arg(&csv)
        .args(["--blocks", "40", "--passes", "3"])
        .assert()
        .success();

    Command::cargo_bin("blocktime")
        .unwrap()
        .arg(&csv)
        .args(["--mode", "average", "--no-plot"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("N: 40\n"));

    Command::cargo_bin("blocktime")
        .unwrap()
        .arg(&csv)
        .arg("--no-plot")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("N: 120\n"));
}
