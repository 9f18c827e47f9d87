//! CLI integration tests.

use assert_cmd::Command;
use predicates::prelude::*;

use satcurve_core::table::SAMPLE_TSV;

fn satcurve() -> Command {
    Command::cargo_bin("satcurve").expect("binary builds")
}

#[test]
fn generate_writes_both_charts() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("table.tsv");
    std::fs::write(&input, SAMPLE_TSV).unwrap();
    let out_dir = dir.path().join("charts");

    satcurve()
        .args([
            "generate",
            "--input",
            input.to_str().unwrap(),
            "--out-dir",
            out_dir.to_str().unwrap(),
            "--models",
            "both",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("acquisition.html"))
        .stdout(predicate::str::contains("cpa.html"));

    for name in ["acquisition.html", "cpa.html"] {
        let html = std::fs::read_to_string(out_dir.join(name)).unwrap();
        assert!(html.contains("<html"));
        assert!(html.contains("Brand A / Category 1"));
    }
}

#[test]
fn generate_reads_stdin_by_default() {
    let dir = tempfile::tempdir().unwrap();

    satcurve()
        .current_dir(dir.path())
        .arg("generate")
        .write_stdin(SAMPLE_TSV)
        .assert()
        .success();

    assert!(dir.path().join("acquisition.html").exists());
}

#[test]
fn generate_rejects_out_of_range_ratio() {
    satcurve()
        .args(["generate", "--ratio", "5.0"])
        .write_stdin(SAMPLE_TSV)
        .assert()
        .failure()
        .stderr(predicate::str::contains("extrapolation ratio"));
}

#[test]
fn missing_columns_fail_with_their_names() {
    satcurve()
        .arg("inspect")
        .write_stdin("segment\tlog_equation\nSeg1\ty = 1 * ln(x) + 2\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("x_min"))
        .stderr(predicate::str::contains("x_max"));
}

#[test]
fn inspect_lists_segments() {
    satcurve()
        .arg("inspect")
        .write_stdin(SAMPLE_TSV)
        .assert()
        .success()
        .stdout(predicate::str::contains("Brand A / Category 1"))
        .stdout(predicate::str::contains("77.1095"));
}

#[test]
fn inspect_json_round_trips_records() {
    let output = satcurve()
        .args(["inspect", "--format", "json"])
        .write_stdin(SAMPLE_TSV)
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let records: Vec<serde_json::Value> = serde_json::from_slice(&output).unwrap();
    assert_eq!(records.len(), 3);
    assert_eq!(records[0]["name"], "Brand A / Category 1");
}

#[test]
fn inspect_warns_on_skipped_rows() {
    satcurve()
        .arg("inspect")
        .write_stdin("segment\tx_min\tx_max\nSeg1\tabc\t100\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("warning"));
}
