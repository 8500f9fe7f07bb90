#![cfg(feature = "cli")]

use predicates::prelude::*;

fn langmuir_inputs() -> serde_json::Value {
    serde_json::json!({
        "isotherm": { "model": "langmuir", "q_max": 10.0, "k": 1.0 },
        "concentration": [0.0, 1.0, 3.0],
    })
}

#[test]
fn cli_fails_without_any_input() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Missing input data"));
}

#[test]
fn cli_works_without_assumptions_with_inputs_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    cmd.arg("--json")
        .arg("--inputs-json")
        .arg(langmuir_inputs().to_string());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"loading\""))
        .stdout(predicate::str::contains("\"langmuir\""));
}

#[test]
fn cli_prints_text_table() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    cmd.arg("--inputs-json").arg(langmuir_inputs().to_string());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Langmuir model"))
        .stdout(predicate::str::contains("5.000000"));
}

#[test]
fn cli_works_without_assumptions_in_stdin_input_document() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    let doc = serde_json::json!({ "inputs": langmuir_inputs() }).to_string();

    cmd.arg("--json").arg("--input").arg("-").write_stdin(doc);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"non_finite\": 0"));
}

#[test]
fn cli_strict_flag_rejects_log_of_zero() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    let inputs = serde_json::json!({
        "isotherm": { "model": "temkin", "k1": 2.0, "k2": 1.0 },
        "concentration": 0.0,
    })
    .to_string();

    cmd.arg("--strict").arg("--inputs-json").arg(inputs);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid domain for temkin"));
}

#[test]
fn cli_list_shows_every_model() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    cmd.arg("--list");

    let output = cmd.assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    for title in [
        "Linear model",
        "Freundlich model",
        "Temkin model",
        "Langmuir model",
        "Langmuir-Freundlich model",
        "Generalized Langmuir model",
        "Redlich-Peterson model",
    ] {
        assert!(text.contains(title), "missing {title} in:\n{text}");
    }
}

#[test]
fn cli_reports_invalid_json_for_inputs_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    cmd.arg("--inputs-json").arg("{not valid json}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --inputs-json"));
}

#[test]
fn cli_reports_invalid_json_for_assumptions_json() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    cmd.arg("--inputs-json")
        .arg(langmuir_inputs().to_string())
        .arg("--assumptions-json")
        .arg("{strict_domain: yes}");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON for --assumptions-json"));
}

#[test]
fn cli_reports_invalid_json_in_file() {
    use std::fs::File;
    use std::io::Write as _;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("bad.json");
    let mut f = File::create(&file_path).unwrap();
    writeln!(f, "this is not json").unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    cmd.arg("--input").arg(file_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Invalid JSON in input document"));
}

#[test]
fn cli_reads_request_file_with_assumptions() {
    use std::fs;
    use tempfile::tempdir;

    let dir = tempdir().unwrap();
    let file_path = dir.path().join("request.json");
    let doc = serde_json::json!({
        "inputs": {
            "isotherm": { "model": "freundlich", "k": 2.0, "n": 0.5 },
            "concentration": 4.0,
        },
        "assumptions": { "round_digits": 3 },
    });
    fs::write(&file_path, doc.to_string()).unwrap();

    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    cmd.arg("--json").arg("--input").arg(file_path);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"loading\": 4.0"));
}

#[test]
fn cli_list_json_includes_formulas() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    cmd.arg("--list").arg("--json");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"redlich_peterson\""))
        .stdout(predicate::str::contains("Q = Qmax*(k*C)/(1 + (k*C)^n)"));
}

#[test]
fn cli_json_reports_non_finite_loadings_as_strings() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    let inputs = serde_json::json!({
        "isotherm": { "model": "temkin", "k1": 2.0, "k2": 1.0 },
        "concentration": [0.0, -1.0],
    })
    .to_string();

    cmd.arg("--json").arg("--inputs-json").arg(inputs);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("\"-inf\""))
        .stdout(predicate::str::contains("\"NaN\""));
}

#[test]
fn cli_rejects_parameters_from_another_model() {
    let mut cmd = assert_cmd::cargo::cargo_bin_cmd!("isotherms_rs");
    let inputs = serde_json::json!({
        "isotherm": { "model": "langmuir", "q_max": 10.0, "k": 1.0, "n": 2.0 },
        "concentration": 1.0,
    })
    .to_string();

    cmd.arg("--inputs-json").arg(inputs);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("unknown field"));
}
