//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;
use tempfile::NamedTempFile;

fn source_file(contents: &str) -> NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".py")
        .tempfile()
        .expect("failed to create temp file");
    file.write_all(contents.as_bytes())
        .expect("failed to write temp file");
    file
}

#[test]
fn converts_a_source_file_to_srcml() {
    let file = source_file("x = 1 + 2\n");
    let mut cmd = Command::cargo_bin("py2srcml").unwrap();
    cmd.arg(file.path());

    let output_pred = predicate::str::contains("<unit language=\"Python\"")
        .and(predicate::str::contains(
            "<name>x</name><operator>=</operator>",
        ))
        .and(predicate::str::contains("</unit>"));

    cmd.assert().success().stdout(output_pred);
}

#[test]
fn refuses_to_run_without_paths() {
    let mut cmd = Command::cargo_bin("py2srcml").unwrap();
    cmd.assert().failure();
}

#[test]
fn ast_json_dumps_the_lowered_tree() {
    let file = source_file("x = 1\n");
    let mut cmd = Command::cargo_bin("py2srcml").unwrap();
    cmd.arg(file.path()).arg("--format").arg("ast-json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Assign").and(predicate::str::contains("Number")));
}

#[test]
fn unsupported_constructs_fail_with_a_diagnostic() {
    let file = source_file("with open('f') as f:\n    pass\n");
    let mut cmd = Command::cargo_bin("py2srcml").unwrap();
    cmd.arg(file.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported"));
}

#[test]
fn a_failing_unit_does_not_stop_later_files() {
    let broken = source_file("del x\n");
    let fine = source_file("y = 2\n");
    let mut cmd = Command::cargo_bin("py2srcml").unwrap();
    cmd.arg(broken.path()).arg(fine.path());

    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("<name>y</name>"))
        .stderr(predicate::str::contains("deletion statement"));
}

#[test]
fn unreadable_paths_are_fatal() {
    let mut cmd = Command::cargo_bin("py2srcml").unwrap();
    cmd.arg("no-such-file.py");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Unable to read"));
}
