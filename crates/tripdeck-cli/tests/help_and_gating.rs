mod support;

use predicates::prelude::*;
use std::fs;

use support::{
    assert_timestamp_log_names, command_in_home, new_command_with_temp_home, write_valid_config,
};

#[test]
fn root_help_runs_without_config() {
    let (mut command, _temp_home) = new_command_with_temp_home();
    command
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: tripdeck"))
        .stdout(predicate::str::contains("--diagnostics"))
        .stdout(predicate::str::contains("list"))
        .stdout(predicate::str::contains("save"))
        .stdout(predicate::str::contains("doctor"));
}

#[test]
fn doctor_runs_without_config() {
    let (mut command, _temp_home) = new_command_with_temp_home();
    command
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("config file exists"))
        .stdout(predicate::str::contains(".config/tripdeck/config.toml"))
        .stdout(predicate::str::contains("FAIL"));
}

#[test]
fn doctor_passes_with_config_and_empty_store() {
    let (mut command, temp_home) = new_command_with_temp_home();
    write_valid_config(temp_home.path());

    command
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicate::str::contains("config parses and validates"))
        .stdout(predicate::str::contains("FAIL").not());
}

#[test]
fn root_command_is_gated_without_config() {
    let (mut command, _temp_home) = new_command_with_temp_home();
    command
        .assert()
        .failure()
        .stderr(predicate::str::contains("missing config at"))
        .stderr(predicate::str::contains(".config/tripdeck/config.toml"))
        .stderr(predicate::str::contains("README.md"));
}

#[test]
fn store_commands_are_gated_without_config() {
    let home = tempfile::tempdir().expect("temp home");
    for args in [vec!["list"], vec!["save", "sample-kyoto"]] {
        command_in_home(home.path())
            .args(&args)
            .assert()
            .failure()
            .stderr(predicate::str::contains("missing config at"));
    }
}

#[test]
fn invalid_config_is_reported() {
    let (mut command, temp_home) = new_command_with_temp_home();
    let config_dir = temp_home.path().join(".config/tripdeck");
    fs::create_dir_all(&config_dir).expect("create config dir");
    fs::write(config_dir.join("config.toml"), "version = 2\n").expect("write config");

    command
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid config at"));
}

#[test]
fn list_shows_catalog_remixes_and_empty_collections() {
    let (mut command, temp_home) = new_command_with_temp_home();
    write_valid_config(temp_home.path());

    command
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Created (0)"))
        .stdout(predicate::str::contains("You haven't created any trips yet"))
        .stdout(predicate::str::contains("Remixed ("))
        .stdout(predicate::str::contains("Saved (0)"))
        .stdout(predicate::str::contains("No saved trips yet"));
}

#[test]
fn added_and_saved_trips_show_up_in_their_tabs() {
    let home = tempfile::tempdir().expect("temp home");
    write_valid_config(home.path());

    command_in_home(home.path())
        .args([
            "add",
            "--title",
            "Paris Trip",
            "--destination",
            "Paris",
            "--country",
            "France",
            "--days",
            "3",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Added trip trip-"));

    command_in_home(home.path())
        .args(["save", "sample-kyoto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved sample-kyoto"));

    command_in_home(home.path())
        .args(["save", "sample-kyoto"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already saved"));

    command_in_home(home.path())
        .args(["list", "--tab", "created"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Created (1)"))
        .stdout(predicate::str::contains("Paris Trip"))
        .stdout(predicate::str::contains("Saved (").not());

    command_in_home(home.path())
        .args(["list", "--tab", "saved"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved (1)"))
        .stdout(predicate::str::contains("Temples & Tea in Kyoto"));
}

#[test]
fn add_rejects_zero_day_trip() {
    let (mut command, temp_home) = new_command_with_temp_home();
    write_valid_config(temp_home.path());

    command
        .args([
            "add",
            "--title",
            "Nowhere",
            "--destination",
            "Paris",
            "--country",
            "France",
            "--days",
            "0",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("duration must be at least 1 day"));
}

#[test]
fn save_rejects_unknown_trip() {
    let (mut command, temp_home) = new_command_with_temp_home();
    write_valid_config(temp_home.path());

    command
        .args(["save", "trip-404"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a trip in the sample catalog"));
}

#[test]
fn list_rejects_unknown_tab() {
    let (mut command, _temp_home) = new_command_with_temp_home();
    command
        .args(["list", "--tab", "archived"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn doctor_with_diagnostics_creates_log_file() {
    let (mut command, temp_home) = new_command_with_temp_home();
    command
        .args(["--diagnostics", "doctor"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Diagnostics enabled:"));

    let diagnostics_dir = temp_home.path().join(".config/tripdeck/diagnostics");
    let logs: Vec<_> = fs::read_dir(&diagnostics_dir)
        .expect("diagnostics dir")
        .filter_map(Result::ok)
        .collect();
    assert_timestamp_log_names(&logs);

    let contents = fs::read_to_string(logs[0].path()).expect("read log");
    assert!(contents.contains("tripdeck diagnostics start"));
}
