//! End-to-end regression runs of the sandhika binary.

use assert_cmd::Command;
use predicates::prelude::*;

fn sandhika() -> Command {
    Command::cargo_bin("sandhika").expect("binary builds")
}

#[test]
fn join_prints_combined_form_and_citation() {
    sandhika()
        .args(["join", "देव", "आलय"])
        .assert()
        .success()
        .stdout(predicate::str::contains("देवालय"))
        .stdout(predicate::str::contains("6.1.101"));
}

#[test]
fn join_without_matching_rule_reports_no_rule() {
    sandhika()
        .args(["join", "क", "त"])
        .assert()
        .success()
        .stdout(predicate::str::contains("no junction rule applied"))
        .stdout(predicate::str::contains("confidence 0.0"));
}

#[test]
fn join_json_output_is_machine_readable() {
    sandhika()
        .args(["join", "अ", "इन्द्रः", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"6.1.87\""))
        .stdout(predicate::str::contains("\"confidence\": 1.0"));
}

#[test]
fn rules_lists_all_four_citations() {
    sandhika()
        .arg("rules")
        .assert()
        .success()
        .stdout(predicate::str::contains("6.1.77"))
        .stdout(predicate::str::contains("6.1.87"))
        .stdout(predicate::str::contains("6.1.88"))
        .stdout(predicate::str::contains("akaḥ savarṇe dīrghaḥ"));
}

#[test]
fn decompose_reports_phoneme_breakdown() {
    sandhika()
        .args(["decompose", "देव"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 phonemes"))
        .stdout(predicate::str::contains("vowel"));
}

#[test]
fn explain_scans_inline_text() {
    sandhika()
        .args(["explain", "इत्यादि"])
        .assert()
        .success()
        .stdout(predicate::str::contains("6.1.77"));
}

#[test]
fn explain_without_input_fails() {
    sandhika()
        .arg("explain")
        .assert()
        .failure()
        .stderr(predicate::str::contains("no input to analyze"));
}
