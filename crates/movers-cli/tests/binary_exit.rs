// SPDX-License-Identifier: MIT OR Apache-2.0

#![forbid(unsafe_code)]

use serde_json::Value;
use std::fs;
use std::process::Command;

const CONFIG: &str = r#"{
    "dataset_name": "Binary run",
    "variable_column_name": "variable",
    "date_column_name": "date",
    "value_column_name": "value",
    "surprisingness_time_window": 2.0
}"#;

const CSV: &str = "\
variable,date,value
Flat,2024-01-01,0.1
Flat,2024-02-01,0.1
Flat,2024-03-01,0.1
Jump,2024-01-01,1
Jump,2024-02-01,1
Jump,2024-03-01,5
";

fn movers() -> Command {
    let mut command = Command::new(env!("CARGO_BIN_EXE_movers"));
    command.env_remove("RUST_LOG");
    command
}

#[test]
fn missing_config_exits_one_with_error_envelope() {
    let dir = tempfile::tempdir().expect("tempdir should exist");
    let data_path = dir.path().join("data.csv");
    fs::write(&data_path, CSV).expect("csv should write");

    let output = movers()
        .arg("rank")
        .arg("-c")
        .arg(dir.path().join("absent.json"))
        .arg(&data_path)
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr should be JSON");
    assert_eq!(stderr["error"]["code"], "io_error");
    assert!(stderr["error"]["message"]
        .as_str()
        .is_some_and(|message| message.contains("absent.json")));
}

#[test]
fn unknown_variable_exits_one_with_invalid_input() {
    let dir = tempfile::tempdir().expect("tempdir should exist");
    let config_path = dir.path().join("config.json");
    let data_path = dir.path().join("data.csv");
    fs::write(&config_path, CONFIG).expect("config should write");
    fs::write(&data_path, CSV).expect("csv should write");

    let output = movers()
        .arg("describe")
        .arg("-c")
        .arg(&config_path)
        .arg(&data_path)
        .arg("--variable")
        .arg("Nope")
        .output()
        .expect("binary should run");

    assert_eq!(output.status.code(), Some(1));
    let stderr: Value = serde_json::from_slice(&output.stderr).expect("stderr should be JSON");
    assert_eq!(stderr["error"]["code"], "invalid_input");
}

#[test]
fn rank_prints_json_to_stdout_and_exits_zero() {
    let dir = tempfile::tempdir().expect("tempdir should exist");
    let config_path = dir.path().join("config.json");
    let data_path = dir.path().join("data.csv");
    fs::write(&config_path, CONFIG).expect("config should write");
    fs::write(&data_path, CSV).expect("csv should write");

    let output = movers()
        .arg("rank")
        .arg("-c")
        .arg(&config_path)
        .arg(&data_path)
        .output()
        .expect("binary should run");

    assert!(output.status.success());
    let ranking: Value = serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    assert_eq!(ranking["dataset_name"], "Binary run");
    assert_eq!(ranking["variables"][0]["name"], "Jump");
    assert_eq!(ranking["variables"][1]["name"], "Flat");
    assert_eq!(ranking["variables"][1]["surprisingness"], 0.0);
}
