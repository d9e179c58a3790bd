use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_help() {
    let mut cmd = Command::cargo_bin("climateqa").unwrap();
    cmd.arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Climate question-answering service"));
}

#[test]
fn test_cli_serve_help() {
    let mut cmd = Command::cargo_bin("climateqa").unwrap();
    cmd.arg("serve").arg("--help").assert().success().stdout(predicate::str::contains("port"));
}

#[test]
fn test_cli_load_help() {
    let mut cmd = Command::cargo_bin("climateqa").unwrap();
    cmd.arg("load")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("GLB.Ts+dSST.csv"));
}
