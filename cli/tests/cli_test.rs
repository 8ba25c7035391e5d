use std::io::Write;

use assert_cmd::Command;
use predicates::prelude::*;

fn locality() -> Command {
    Command::cargo_bin("locality").expect("locality binary built")
}

fn tiny_config() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("create config");
    writeln!(
        file,
        "seed = 42\n\n[matrix]\nsides = [4, 8, 16]\nmax_side = 16\nwrite_value = 3\n\n[sequence]\nsizes = [8, 32]"
    )
    .expect("write config");
    file
}

#[test]
fn test_plan_lists_registered_cases() {
    locality()
        .arg("plan")
        .assert()
        .success()
        .stdout(predicate::str::contains("matrix/friendly/read"))
        .stdout(predicate::str::contains("sequence/sorted_insert/multiset/large"));
}

#[test]
fn test_matrix_sweep_reports_throughput_and_fit() {
    let config = tiny_config();
    locality()
        .args(["matrix", "-n", "2", "--filter", "friendly/write"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("matrix/friendly/write"))
        .stdout(predicate::str::contains("matrix/friendly/write_dependent"))
        .stdout(predicate::str::contains("items/s"))
        .stdout(predicate::str::contains("complexity (ns):"))
        .stdout(predicate::str::contains("matrix/friendly/read").not());
}

#[test]
fn test_sequence_sweep_runs_filtered_cases() {
    let config = tiny_config();
    locality()
        .args(["sequence", "-n", "1", "-f", "/list/"])
        .arg("--config")
        .arg(config.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("sequence/append_then_sort/list/small"))
        .stdout(predicate::str::contains("bytes/s"))
        .stdout(predicate::str::contains("sequence/append/vec").not());
}

#[test]
fn test_invalid_config_fails() {
    let mut file = tempfile::NamedTempFile::new().expect("create config");
    writeln!(file, "[matrix]\nsides = [64]\nmax_side = 8").expect("write config");
    locality()
        .arg("plan")
        .arg("--config")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds matrix.max_side"));
}

#[test]
fn test_invalid_log_filter_is_reported() {
    locality()
        .args(["plan", "--log", "locality=loud"])
        .assert()
        .success()
        .stderr(predicate::str::contains("invalid log filter 'locality=loud'"))
        .stdout(predicate::str::contains("matrix/friendly/read"));
}
